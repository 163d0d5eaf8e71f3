//! Conversions between balanced trits, signed big integers and fixed-width binary words.
//!
//! A block of `n` balanced trits `t[0..n]` denotes the integer `sum(t[i] * 3^i)`, which
//! covers the range `[-(3^n - 1)/2, (3^n - 1)/2]`. Binary words are two's-complement,
//! big-endian and sign-extended to the word width.

use num_bigint::{
    BigInt,
    BigUint,
    Sign,
};
use num_traits::{
    ToPrimitive,
    Zero,
};

use super::defs::*;
use crate::{
    err,
    prelude::Vec,
    try_or,
    Errors::{
        BadTrit,
        LengthMismatch,
        ValueOutOfRange,
        WordOverflow,
    },
    Result,
};

/// `3^n`.
pub fn pow3(n: usize) -> BigUint {
    num_traits::pow(BigUint::from(3_u32), n)
}

/// Largest integer representable by `n` balanced trits, `(3^n - 1) / 2`.
pub fn max_value(n: usize) -> BigInt {
    BigInt::from((pow3(n) - 1_u32) >> 1)
}

/// Interpret exactly `block_size` trits as a little-endian balanced ternary number.
pub fn trits_to_integer(trits: &[Trit], block_size: usize) -> Result<BigInt> {
    try_or!(trits.len() == block_size, LengthMismatch(block_size, trits.len()))?;
    let mut acc = BigInt::zero();
    for t in trits.iter().rev() {
        try_or!(t.is_valid(), BadTrit(t.0))?;
        acc = acc * 3_u32 + i32::from(t.0);
    }
    Ok(acc)
}

/// Remainder and quotient of a non-negative `n` divided by 3.
fn div_rem3(n: &BigUint) -> (BigUint, u8) {
    let q = n / 3_u32;
    let r = n - &q * 3_u32;
    (q, r.to_u8().unwrap_or_default())
}

/// Expand `value` into exactly `block_size` balanced trits, lowest trit first.
pub fn integer_to_trits(value: &BigInt, block_size: usize) -> Result<Vec<Trit>> {
    let (sign, mut magnitude) = value.clone().into_parts();
    try_or!(magnitude <= pow3(block_size) >> 1, ValueOutOfRange(block_size))?;

    let mut trits = Vec::with_capacity(block_size);
    for _ in 0..block_size {
        let (q, r) = div_rem3(&magnitude);
        magnitude = q;
        let t = if r == 2 {
            magnitude += 1_u32;
            -1
        } else {
            r as i8
        };
        trits.push(Trit(t));
    }
    debug_assert!(magnitude.is_zero());

    if sign == Sign::Minus {
        for t in trits.iter_mut() {
            *t = -*t;
        }
    }
    Ok(trits)
}

/// The integer congruent to `value` modulo `3^block_size` that lies in the balanced range of
/// `block_size` trits.
pub fn reduce_balanced(value: &BigInt, block_size: usize) -> BigInt {
    let modulus = BigInt::from(pow3(block_size));
    let half = max_value(block_size);
    let mut r = (value + &half) % &modulus;
    if r.sign() == Sign::Minus {
        r += &modulus;
    }
    r - half
}

/// Two's-complement big-endian encoding of `value` sign-extended to `width` bytes.
pub fn integer_to_word(value: &BigInt, width: usize) -> Result<Vec<u8>> {
    let bytes = value.to_signed_bytes_be();
    if bytes.len() > width {
        return err!(WordOverflow(width, bytes.len()));
    }
    let fill = if value.sign() == Sign::Minus { 0xff } else { 0x00 };
    let mut word = vec![fill; width - bytes.len()];
    word.extend_from_slice(&bytes);
    Ok(word)
}

/// Signed integer of a two's-complement big-endian word.
pub fn word_to_integer(word: &[u8]) -> BigInt {
    BigInt::from_signed_bytes_be(word)
}

/// Map a block of trits onto a binary word of `width` bytes.
///
/// Only the first `trits.len() - 1` trits are significant, the last trit is treated as zero.
pub fn trits_to_word(trits: &[Trit], width: usize) -> Result<Vec<u8>> {
    let n = trits.len().saturating_sub(1);
    let value = trits_to_integer(&trits[..n], n)?;
    integer_to_word(&value, width)
}

/// Map a binary word onto a block of `block_size` trits.
///
/// The word is reduced into the range of `block_size - 1` trits; the last trit is always zero.
pub fn word_to_trits(word: &[u8], block_size: usize) -> Result<Vec<Trit>> {
    let n = block_size.saturating_sub(1);
    let value = reduce_balanced(&word_to_integer(word), n);
    let mut trits = integer_to_trits(&value, n)?;
    trits.resize(block_size, ZERO_TRIT);
    Ok(trits)
}
