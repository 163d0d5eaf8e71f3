//! Balanced trits and trytes, the tryte alphabet and integer/word conversions.

mod convert;
mod defs;
mod integer;
mod util;

pub use convert::*;
pub use defs::*;
pub use integer::*;
pub use util::*;
