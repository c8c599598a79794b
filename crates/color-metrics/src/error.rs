//! Error types for color conversions
//!
//! Conversion errors are local to a single color: a channel outside its
//! representable range, or a hex string that cannot be parsed.

use std::fmt;

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer than 6 characters remained after stripping the optional '#'
    TooShort {
        /// Number of characters that were present
        len: usize,
    },
    /// A character in the first six positions is not a hex digit
    InvalidDigit {
        /// The offending character
        c: char,
        /// Position of the character after stripping '#'
        index: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::TooShort { len } => {
                write!(f, "hex color too short ({} characters, expected 6)", len)
            }
            FormatError::InvalidDigit { c, index } => {
                write!(f, "invalid hex character {:?} at position {}", c, index)
            }
        }
    }
}

/// Error type for color construction and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A channel value lies outside `[0, max]`
    Domain {
        /// The rejected value
        value: u32,
        /// Largest value representable at the requested depth
        max: u32,
    },
    /// A hex color string could not be parsed
    Format(FormatError),
    /// Quantization depth outside `1..=8` bits per channel
    UnsupportedDepth(u8),
}

impl From<FormatError> for ColorError {
    fn from(err: FormatError) -> Self {
        ColorError::Format(err)
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Domain { value, max } => {
                write!(f, "channel value {} out of range (0..={})", value, max)
            }
            ColorError::Format(err) => write!(f, "invalid hex color: {}", err),
            ColorError::UnsupportedDepth(bits) => {
                write!(
                    f,
                    "unsupported depth of {} bits per channel (expected 1..=8)",
                    bits
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl std::error::Error for ColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColorError::Format(err) => Some(err),
            _ => None,
        }
    }
}
