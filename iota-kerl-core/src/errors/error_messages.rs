use displaydoc::Display;

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errors {
    //////////
    // Sponge
    //////////
    /// Length {0} is not a positive multiple of the block size {1}
    InvalidLength(usize, usize),
    /// Range end {0} exceeds buffer size {1}
    OutOfBounds(usize, usize),

    //////////
    // Encoding
    //////////
    /// Value {0} is not a balanced trit
    BadTrit(i8),
    /// Character '{0}' is not a tryte
    BadTryte(char),
    /// Size of trit chunk does not match (expected: {0}, found: {1})
    LengthMismatch(usize, usize),
    /// Trit count {0} is not a multiple of 3
    TrytesLength(usize),

    //////////
    // Conversion
    //////////
    /// Integer does not fit into {0} balanced trits
    ValueOutOfRange(usize),
    /// Integer needs {1} bytes, exceeding the word width of {0} bytes
    WordOverflow(usize, usize),
}

#[cfg(feature = "std")]
impl std::error::Error for Errors {}
