use super::{
    prp::PRP,
    ByteLength,
    Word,
    BYTE_LENGTH,
    HASH_LENGTH,
};
use crate::{
    prelude::{
        hex,
        Vec,
    },
    trinary::{
        trits_to_word,
        word_to_trits,
        Trit,
    },
    try_or,
    Errors::{
        InvalidLength,
        OutOfBounds,
    },
    Result,
};

/// Check that `length` is a positive multiple of the block size and that the range
/// `offset..offset + length` lies within a buffer of `size` trits.
fn check_range(size: usize, offset: usize, length: usize) -> Result<()> {
    try_or!(length != 0 && length % HASH_LENGTH == 0, InvalidLength(length, HASH_LENGTH))?;
    let end = offset.saturating_add(length);
    try_or!(end <= size, OutOfBounds(end, size))
}

/// Ternary sponge over a binary permutation with 48-byte blocks.
///
/// Trits are consumed and produced in blocks of `HASH_LENGTH` trits, each block maps onto one
/// 384-bit word of the permutation. After every squeezed block the permutation is reset and
/// re-seeded with the bitwise complement of the word just squeezed.
#[derive(Clone, Copy, Default)]
pub struct Kerl<F> {
    /// Permutation together with its internal state.
    s: F,

    /// Trits absorbed since the last reset.
    absorbed: usize,

    /// Trits squeezed since the last reset.
    squeezed: usize,
}

impl<F> Kerl<F>
where
    F: Default,
{
    /// Create a Kerl object with a zero permutation state.
    pub fn init() -> Self {
        Self {
            s: F::default(),
            absorbed: 0,
            squeezed: 0,
        }
    }
}

impl<F: PRP<BlockSize = ByteLength>> Kerl<F> {
    /// Number of trits in a hash block.
    pub const HASH_LENGTH: usize = HASH_LENGTH;

    /// Forget all absorbed and squeezed data.
    pub fn reset(&mut self) {
        self.s.reset();
        self.absorbed = 0;
        self.squeezed = 0;
    }

    /// Absorb `trits[offset..offset + length]`, `length` being a positive multiple of `HASH_LENGTH`.
    ///
    /// The last trit of every block is ignored. On error the state is left untouched.
    pub fn absorb(&mut self, trits: &[Trit], offset: usize, length: usize) -> Result<()> {
        check_range(trits.len(), offset, length)?;
        let words = trits[offset..offset + length]
            .chunks(HASH_LENGTH)
            .map(|block| trits_to_word(block, BYTE_LENGTH))
            .collect::<Result<Vec<_>>>()?;

        for word in words {
            let word = Word::clone_from_slice(&word);
            log::trace!("kerl absorb: {}", hex::encode(&word));
            self.s.absorb_block(&word);
            self.absorbed += HASH_LENGTH;
        }
        Ok(())
    }

    /// Squeeze `length` trits into `trits[offset..offset + length]`, `length` being a positive
    /// multiple of `HASH_LENGTH`.
    ///
    /// The last trit of every block is zero.
    pub fn squeeze(&mut self, trits: &mut [Trit], offset: usize, length: usize) -> Result<()> {
        check_range(trits.len(), offset, length)?;

        for block in trits[offset..offset + length].chunks_mut(HASH_LENGTH) {
            let mut word = self.s.squeeze_block();
            log::trace!("kerl squeeze: {}", hex::encode(&word));
            block.copy_from_slice(&word_to_trits(&word, HASH_LENGTH)?);

            for b in word.iter_mut() {
                *b = !*b;
            }
            self.s.reset();
            self.s.absorb_block(&word);
            self.squeezed += HASH_LENGTH;
        }
        Ok(())
    }

    /// Squeeze `length` trits into a new buffer.
    pub fn squeeze_trits(&mut self, length: usize) -> Result<Vec<Trit>> {
        let mut trits = vec![Trit(0); length];
        self.squeeze(&mut trits, 0, length)?;
        Ok(trits)
    }

    /// Number of trits absorbed since the last reset.
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    /// Number of trits squeezed since the last reset.
    pub fn squeezed(&self) -> usize {
        self.squeezed
    }
}

impl<F> Kerl<F>
where
    F: PRP<BlockSize = ByteLength> + Default,
{
    /// Hash `trits` (a positive multiple of `HASH_LENGTH`) into a single block.
    pub fn digest(trits: &[Trit]) -> Result<Vec<Trit>> {
        let mut s = Self::init();
        s.absorb(trits, 0, trits.len())?;
        s.squeeze_trits(HASH_LENGTH)
    }
}
