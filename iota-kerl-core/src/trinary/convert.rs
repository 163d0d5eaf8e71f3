use core::convert::TryFrom;

use super::{
    defs::*,
    util::mods1,
};
use crate::{
    err,
    prelude::{
        String,
        Vec,
    },
    try_or,
    Errors::{
        BadTrit,
        BadTryte,
        TrytesLength,
    },
    Result,
};

impl From<&[Trit; 3]> for Tryte {
    fn from(ts: &[Trit; 3]) -> Tryte {
        Tryte(ts[0].0 + 3 * (ts[1].0 + 3 * ts[2].0))
    }
}

impl From<[Trit; 3]> for Tryte {
    fn from(ts: [Trit; 3]) -> Tryte {
        Tryte::from(&ts)
    }
}

impl From<Tryte> for [Trit; 3] {
    fn from(t: Tryte) -> [Trit; 3] {
        let (t0, q0) = mods1(t.0 as i32);
        let (t1, q1) = mods1(q0);
        let (t2, _) = mods1(q1);
        [t0, t1, t2]
    }
}

/// Convert tryte to char:
/// - `0 => '9'`;
/// - `1 => 'A'`;
/// - `13 => 'M'`;
/// - `-13 => 'N'`;
/// - `-1 => 'Z'`.
fn tryte_to_char(t: Tryte) -> char {
    debug_assert!(MIN_TRYTE <= t && t <= MAX_TRYTE);
    if t.0 < 0 {
        ((t.0 + 26) as u8 + b'A') as char
    } else if t.0 > 0 {
        ((t.0 - 1) as u8 + b'A') as char
    } else {
        '9'
    }
}

impl From<Tryte> for char {
    fn from(t: Tryte) -> char {
        tryte_to_char(t)
    }
}

fn tryte_from_char(c: char) -> Option<Tryte> {
    if ('A'..='M').contains(&c) {
        Some(Tryte(c as i8 - b'A' as i8 + 1))
    } else if ('N'..='Z').contains(&c) {
        Some(Tryte(c as i8 - b'A' as i8 - 26))
    } else if '9' == c {
        Some(Tryte(0))
    } else {
        None
    }
}

impl TryFrom<char> for Tryte {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Tryte> {
        match tryte_from_char(c) {
            Some(t) => Ok(t),
            None => err!(BadTryte(c)),
        }
    }
}

/// Decode a tryte string into trits, 3 trits per character, lowest trit first.
pub fn trits_from_trytes(trytes: &str) -> Result<Vec<Trit>> {
    let mut trits = Vec::with_capacity(trytes.len() * TRITS_PER_TRYTE);
    for c in trytes.chars() {
        let ts: [Trit; 3] = Tryte::try_from(c)?.into();
        trits.extend_from_slice(&ts);
    }
    Ok(trits)
}

/// Encode trits as a tryte string. The number of trits must be a multiple of 3.
pub fn trytes_from_trits(trits: &[Trit]) -> Result<String> {
    try_or!(trits.len() % TRITS_PER_TRYTE == 0, TrytesLength(trits.len()))?;
    let mut trytes = String::with_capacity(trits.len() / TRITS_PER_TRYTE);
    for chunk in trits.chunks(TRITS_PER_TRYTE) {
        for t in chunk {
            try_or!(t.is_valid(), BadTrit(t.0))?;
        }
        let t = Tryte(chunk[0].0 + 3 * (chunk[1].0 + 3 * chunk[2].0));
        trytes.push(char::from(t));
    }
    Ok(trytes)
}
