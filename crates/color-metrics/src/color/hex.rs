//! Hex string encoding and decoding

use super::rgb::Rgb;
use crate::error::{ColorError, FormatError};

/// Number of hex digits in an `rrggbb` color.
const HEX_COLOR_DIGITS: usize = 6;

/// Encode a single channel value as two lowercase, zero-padded hex digits.
///
/// Returns [`ColorError::Domain`] for values above 255.
///
/// ```
/// use color_metrics::int_to_hex_byte;
///
/// assert_eq!(int_to_hex_byte(10).unwrap(), "0a");
/// assert!(int_to_hex_byte(256).is_err());
/// ```
pub fn int_to_hex_byte(value: u32) -> Result<String, ColorError> {
    let byte = u8::try_from(value).map_err(|_| ColorError::Domain {
        value,
        max: u32::from(u8::MAX),
    })?;
    Ok(hex::encode([byte]))
}

/// Encode a color as `#rrggbb`, channels in red, green, blue order.
pub fn rgb_to_hex(color: Rgb) -> String {
    format!("#{}", hex::encode(color.to_bytes()))
}

/// Parse a color from a hex string with or without a leading `#`.
///
/// Surrounding whitespace is trimmed. The first six characters are read as
/// three two-digit groups; anything after them is ignored.
pub fn hex_to_rgb(input: &str) -> Result<Rgb, ColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let len = digits.chars().count();
    if len < HEX_COLOR_DIGITS {
        return Err(FormatError::TooShort { len }.into());
    }

    // Reject non-hex characters before slicing so multi-byte chars never
    // land on a byte boundary we split.
    if let Some((index, c)) = digits
        .chars()
        .take(HEX_COLOR_DIGITS)
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(FormatError::InvalidDigit { c, index }.into());
    }

    let mut bytes = [0u8; 3];
    hex::decode_to_slice(&digits[..HEX_COLOR_DIGITS], &mut bytes).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            ColorError::from(FormatError::InvalidDigit { c, index })
        }
        _ => ColorError::from(FormatError::TooShort { len }),
    })?;

    Ok(Rgb::from_bytes(bytes))
}
