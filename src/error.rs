use thiserror::Error;

/// Errors from parsing, printing and the fallible arithmetic entry points.
#[derive(Error, Debug)]
pub enum BigIntError {
    /// Radix outside 2..=62
    #[error("radix {0} is outside the supported range 2..=62")]
    InvalidRadix(u32),

    /// Character not in the alphabet of the requested radix
    #[error("invalid digit {digit:?} at position {position} for radix {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },

    /// A sign with nothing after it
    #[error("sign without digits")]
    MissingDigits,

    /// Zero divisor passed to `div` or `rem`
    #[error("division by zero")]
    DivisionByZero,

    /// Negative exponent, or one wider than 64 bits
    #[error("exponent must be non-negative and fit in 64 bits")]
    ExponentOutOfRange,

    /// Conversion to a primitive integer that cannot hold the value
    #[error("value does not fit in the target integer type")]
    OutOfRange,

    /// Writer failure while printing
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
