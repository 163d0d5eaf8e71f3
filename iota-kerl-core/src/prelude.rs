#[cfg(not(feature = "std"))]
pub use alloc::{
    boxed::{
        self,
        Box,
    },
    format,
    string::{self, String, ToString},
    vec::{self, Vec},
};

#[cfg(feature = "std")]
pub use std::{
    boxed::{
        self,
        Box,
    },
    format,
    string::{self, String, ToString},
    vec::{self, Vec},
};

// Reexport generic_array and typenum crates here in order to simplify their import in other dependencies.
pub use generic_array::{
    self,
    typenum,
};

pub use hex;
pub use num_bigint;
