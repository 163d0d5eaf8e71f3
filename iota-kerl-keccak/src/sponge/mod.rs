pub mod prp;

/// Kerl: the ternary sponge over Keccak-384.
pub type Kerl = iota_kerl_core::sponge::kerl::Kerl<prp::keccak::Keccak384>;
