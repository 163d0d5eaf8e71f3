//! # Kerl
//! Kerl is the ternary hash of the IOTA ledger. Trits are absorbed in blocks of 243, each block
//! is mapped onto a 384-bit word and fed to Keccak-384; squeezed words are mapped back onto
//! trits.
//!
//! ```
//! use iota_kerl::{
//!     iota_kerl_core::trinary::{trits_from_trytes, trytes_from_trits},
//!     Kerl,
//! };
//!
//! # fn main() -> iota_kerl::iota_kerl_core::Result<()> {
//! let trits = trits_from_trytes(&"9".repeat(81))?;
//! let mut kerl = Kerl::init();
//! kerl.absorb(&trits, 0, trits.len())?;
//! let hash = trytes_from_trits(&kerl.squeeze_trits(Kerl::HASH_LENGTH)?)?;
//! assert_eq!(81, hash.len());
//! # Ok(())
//! # }
//! ```
#![no_std]

/// Ternary encodings, errors and sponge abstractions.
pub use iota_kerl_core;
/// Keccak-384 permutation and the Kerl sponge.
pub use iota_kerl_keccak;

pub use iota_kerl_keccak::Kerl;
