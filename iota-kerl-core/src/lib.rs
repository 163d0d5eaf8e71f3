#![no_std]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[cfg(not(feature = "err-location-log"))]
pub const LOCATION_LOG: bool = false;

#[cfg(feature = "err-location-log")]
pub const LOCATION_LOG: bool = true;

pub use anyhow::{
    anyhow,
    bail,
    ensure,
    Error,
    Result,
};

pub mod errors;
pub mod prelude;
pub mod sponge;
pub mod trinary;

pub use errors::{
    error_handler::*,
    error_messages::*,
};

// Reexported so that `err!`/`try_or!` expand in dependent crates without them importing `log`.
#[doc(hidden)]
pub use log;
