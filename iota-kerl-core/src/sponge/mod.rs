use crate::prelude::{
    generic_array::GenericArray,
    typenum::U48,
};

pub mod kerl;
pub mod prp;

/// Number of trits in a hash block.
pub const HASH_LENGTH: usize = 243;

/// Number of bytes in a binary hash block.
pub const BYTE_LENGTH: usize = 48;
pub type ByteLength = U48;
pub type Word = GenericArray<u8, ByteLength>;

#[cfg(test)]
pub mod tests;
