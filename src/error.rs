//! Error types for the typed constructors.
//!
//! The free functions never fail; they degrade to a fallback color instead.
//! Only `HexColor` parsing and `Step` conversion surface these errors.

use thiserror::Error;

/// Result type alias using the crate's error type
pub type Result<T> = std::result::Result<T, ColorError>;

/// Reasons a string or number cannot become a typed color value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input was empty
    #[error("empty color string")]
    Empty,

    /// Input did not start with `#`
    #[error("hex color must start with '#'")]
    MissingHash,

    /// Digit count after `#` was not 3 or 6
    #[error("invalid hex length {0}, expected 3 or 6 digits")]
    InvalidLength(usize),

    /// A character after `#` was not a hex digit
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),

    /// Tone step outside 1..=5
    #[error("invalid tone step {0}, expected 1 to 5")]
    InvalidStep(u8),
}
