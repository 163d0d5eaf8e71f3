use generic_array::{
    ArrayLength,
    GenericArray,
};

/// Pseudo-random permutation with a fixed-width block interface.
///
/// The state is advanced only by `absorb_block`; `squeeze_block` reads a block derived from
/// the current state without consuming it. Sponges built on top decide how to move the state
/// forward between consecutive squeezes.
#[allow(clippy::upper_case_acronyms)]
pub trait PRP {
    /// Size of a block in bytes.
    type BlockSize: ArrayLength<u8>;

    /// Reset the state to all zero.
    fn reset(&mut self);

    /// Inject a block into the state.
    fn absorb_block(&mut self, block: &GenericArray<u8, Self::BlockSize>);

    /// Eject a block from the current state.
    fn squeeze_block(&self) -> GenericArray<u8, Self::BlockSize>;
}
