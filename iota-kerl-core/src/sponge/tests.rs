use super::{
    kerl::Kerl,
    prp::PRP,
    Word,
    HASH_LENGTH,
};
use crate::{
    prelude::{
        generic_array::GenericArray,
        typenum,
        Vec,
    },
    trinary::{
        word_to_trits,
        Trit,
        ZERO_TRIT,
    },
    Errors,
    Result,
};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TestF48(pub [u8; 48]);

impl Default for TestF48 {
    fn default() -> Self {
        Self([0_u8; 48])
    }
}

fn transform(s: &mut [u8]) {
    let mut carry = 0x5a_u8;
    for x in s.iter_mut() {
        *x = x.rotate_left(3) ^ carry;
        carry = carry.wrapping_add(*x);
    }
}

impl PRP for TestF48 {
    type BlockSize = typenum::U48;

    fn reset(&mut self) {
        self.0 = [0_u8; 48];
    }

    fn absorb_block(&mut self, block: &GenericArray<u8, Self::BlockSize>) {
        for (s, b) in self.0.iter_mut().zip(block.iter()) {
            *s ^= *b;
        }
        transform(&mut self.0);
    }

    fn squeeze_block(&self) -> GenericArray<u8, Self::BlockSize> {
        GenericArray::clone_from_slice(&self.0)
    }
}

type TestKerl = Kerl<TestF48>;

fn error_of<T: core::fmt::Debug>(r: Result<T>) -> Errors {
    *r.unwrap_err().downcast_ref::<Errors>().unwrap()
}

fn input(blocks: usize) -> Vec<Trit> {
    (0..blocks * HASH_LENGTH)
        .map(|i| Trit(((i * 5 + i / 3) % 3) as i8 - 1))
        .collect()
}

#[test]
fn block_length_is_enforced() -> Result<()> {
    let trits = input(2);
    let mut out = vec![ZERO_TRIT; 2 * HASH_LENGTH];
    let mut s = TestKerl::init();

    for length in [0, HASH_LENGTH - 1, HASH_LENGTH + 1] {
        assert_eq!(
            Errors::InvalidLength(length, HASH_LENGTH),
            error_of(s.absorb(&trits, 0, length))
        );
        assert_eq!(
            Errors::InvalidLength(length, HASH_LENGTH),
            error_of(s.squeeze(&mut out, 0, length))
        );
    }
    assert_eq!(
        Errors::OutOfBounds(2 * HASH_LENGTH + 1, 2 * HASH_LENGTH),
        error_of(s.absorb(&trits, 1, 2 * HASH_LENGTH))
    );
    assert_eq!(
        Errors::OutOfBounds(HASH_LENGTH + 300, 2 * HASH_LENGTH),
        error_of(s.squeeze(&mut out, 300, HASH_LENGTH))
    );
    assert_eq!(0, s.absorbed());
    assert_eq!(0, s.squeezed());
    assert_eq!(TestKerl::init().squeeze_trits(HASH_LENGTH)?, s.squeeze_trits(HASH_LENGTH)?);
    Ok(())
}

#[test]
fn failed_absorb_leaves_state_untouched() -> Result<()> {
    let mut trits = input(2);
    trits[HASH_LENGTH + 10] = Trit(3);

    let mut s = TestKerl::init();
    s.absorb(&trits, 0, HASH_LENGTH)?;
    assert_eq!(Errors::BadTrit(3), error_of(s.absorb(&trits, 0, 2 * HASH_LENGTH)));
    assert_eq!(HASH_LENGTH, s.absorbed());

    let mut t = TestKerl::init();
    t.absorb(&trits, 0, HASH_LENGTH)?;
    assert_eq!(t.squeeze_trits(HASH_LENGTH)?, s.squeeze_trits(HASH_LENGTH)?);
    Ok(())
}

#[test]
fn squeeze_reseeds_with_complement() -> Result<()> {
    let trits = input(1);
    let mut s = TestKerl::init();
    s.absorb(&trits, 0, HASH_LENGTH)?;
    let out = s.squeeze_trits(2 * HASH_LENGTH)?;

    let mut f = TestF48::default();
    f.absorb_block(&Word::clone_from_slice(&crate::trinary::trits_to_word(&trits, 48)?));
    let first: Word = f.squeeze_block();
    assert_eq!(word_to_trits(&first, HASH_LENGTH)?, &out[..HASH_LENGTH]);

    let mut complement = first;
    for b in complement.iter_mut() {
        *b = !*b;
    }
    f.reset();
    f.absorb_block(&complement);
    let second: Word = f.squeeze_block();
    assert_eq!(word_to_trits(&second, HASH_LENGTH)?, &out[HASH_LENGTH..]);

    assert_eq!(ZERO_TRIT, out[HASH_LENGTH - 1]);
    assert_eq!(ZERO_TRIT, out[2 * HASH_LENGTH - 1]);
    Ok(())
}

#[test]
fn squeeze_is_associative() -> Result<()> {
    let trits = input(3);
    let mut s = TestKerl::init();
    s.absorb(&trits, 0, trits.len())?;
    let mut t = s;

    let whole = s.squeeze_trits(3 * HASH_LENGTH)?;
    let mut parts = vec![ZERO_TRIT; 3 * HASH_LENGTH];
    t.squeeze(&mut parts, 0, HASH_LENGTH)?;
    t.squeeze(&mut parts, HASH_LENGTH, 2 * HASH_LENGTH)?;
    assert_eq!(whole, parts);
    assert_eq!(3 * HASH_LENGTH, t.squeezed());
    Ok(())
}

#[test]
fn squeeze_respects_offset() -> Result<()> {
    let trits = input(1);
    let mut s = TestKerl::init();
    s.absorb(&trits, 0, HASH_LENGTH)?;
    let mut out = vec![Trit(1); HASH_LENGTH + 5];
    s.squeeze(&mut out, 3, HASH_LENGTH)?;
    assert_eq!(&[Trit(1); 3], &out[..3]);
    assert_eq!(&[Trit(1); 2], &out[HASH_LENGTH + 3..]);
    assert_eq!(TestKerl::digest(&trits)?, &out[3..HASH_LENGTH + 3]);
    Ok(())
}

#[test]
fn reset_restores_fresh_state() -> Result<()> {
    let trits = input(2);
    let fresh = TestKerl::digest(&trits)?;

    let mut s = TestKerl::init();
    s.absorb(&input(3), 0, 3 * HASH_LENGTH)?;
    s.squeeze_trits(HASH_LENGTH)?;
    s.reset();
    assert_eq!(0, s.absorbed());
    assert_eq!(0, s.squeezed());
    s.absorb(&trits, 0, trits.len())?;
    assert_eq!(fresh, s.squeeze_trits(HASH_LENGTH)?);
    Ok(())
}
