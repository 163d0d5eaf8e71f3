#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod sponge;

pub use sponge::{
    prp::keccak::Keccak384,
    Kerl,
};
