use iota_kerl_core::{
    prelude::{
        generic_array::GenericArray,
        typenum::U48,
    },
    sponge::prp::PRP,
};

/// Rate of Keccak-384 in bytes, `(1600 - 2 * 384) / 8`.
pub const RATE: usize = 104;

/// Keccak-384 sponge over the `Keccak-F[1600]` permutation with the original Keccak padding.
///
/// Blocks are streamed into the rate; squeezing pads and permutes a copy of the state so that
/// absorbing may continue afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Keccak384 {
    /// Inner state for transformation
    state: [u64; 25],

    /// Current position (offset in bytes) within the rate.
    pos: usize,
}

impl Keccak384 {
    /// Use `Keccak-F[1600]` sponge function on inner state
    fn permutation(&mut self) {
        keccak::f1600(&mut self.state);
    }

    fn xor_byte(&mut self, i: usize, b: u8) {
        self.state[i / 8] ^= (b as u64) << (8 * (i % 8));
    }

    fn byte(&self, i: usize) -> u8 {
        (self.state[i / 8] >> (8 * (i % 8))) as u8
    }

    pub fn absorb(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.xor_byte(self.pos, *b);
            self.pos += 1;
            if self.pos == RATE {
                self.permutation();
                self.pos = 0;
            }
        }
    }

    pub fn finalize(&self) -> GenericArray<u8, U48> {
        let mut s = *self;
        s.xor_byte(s.pos, 0x01);
        s.xor_byte(RATE - 1, 0x80);
        s.permutation();

        let mut out = GenericArray::default();
        for (i, o) in out.iter_mut().enumerate() {
            *o = s.byte(i);
        }
        out
    }
}

impl PRP for Keccak384 {
    type BlockSize = U48;

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn absorb_block(&mut self, block: &GenericArray<u8, Self::BlockSize>) {
        self.absorb(block);
    }

    fn squeeze_block(&self) -> GenericArray<u8, Self::BlockSize> {
        self.finalize()
    }
}
