use core::fmt;

/// Balanced trit type: -1..1.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Default, Hash)]
pub struct Trit(pub i8);
pub const MAX_TRIT: Trit = Trit(1);
pub const ZERO_TRIT: Trit = Trit(0);
pub const MIN_TRIT: Trit = Trit(-1);

impl Trit {
    pub fn is_valid(self) -> bool {
        MIN_TRIT <= self && self <= MAX_TRIT
    }
}

impl core::ops::Neg for Trit {
    type Output = Trit;
    fn neg(self) -> Trit {
        Trit(-self.0)
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Balanced tryte type: -13..13.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Default, Hash)]
pub struct Tryte(pub i8);
pub const MAX_TRYTE: Tryte = Tryte(13);
pub const MIN_TRYTE: Tryte = Tryte(-13);

impl fmt::Display for Tryte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of trits in a tryte.
pub const TRITS_PER_TRYTE: usize = 3;

/// Tryte alphabet ordered by unsigned tryte value, `'9'` stands for zero.
pub const TRYTE_ALPHABET: &str = "9ABCDEFGHIJKLMNOPQRSTUVWXYZ";
