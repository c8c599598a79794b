//! 8-bit RGB color type

use std::fmt;
use std::str::FromStr;

use super::hex::{hex_to_rgb, rgb_to_hex};
use crate::error::ColorError;

/// A color with three 8-bit channels.
///
/// Channels are gamma-encoded sRGB values in `0..=255`. The `u8` storage
/// makes out-of-range channels unrepresentable, so every conversion taking
/// an `Rgb` is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub red: u8,
    /// Green channel (0..=255)
    pub green: u8,
    /// Blue channel (0..=255)
    pub blue: u8,
}

impl Rgb {
    /// Pure black, `#000000`
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white, `#ffffff`
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl fmt::Display for Rgb {
    /// Formats as a lowercase `#rrggbb` string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&rgb_to_hex(*self))
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parse a color from `#rrggbb` or `rrggbb` (case-insensitive).
    ///
    /// ```
    /// use color_metrics::Rgb;
    ///
    /// let teal: Rgb = "008080".parse().unwrap();
    /// assert_eq!(teal, Rgb::new(0, 128, 128));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Rgb::BLACK.to_bytes(), [0, 0, 0]);
        assert_eq!(Rgb::WHITE.to_bytes(), [255, 255, 255]);
    }

    #[test]
    fn test_bytes_round_trip() {
        let color = Rgb::from_bytes([12, 34, 56]);
        assert_eq!(color.red, 12);
        assert_eq!(color.green, 34);
        assert_eq!(color.blue, 56);
        assert_eq!(color.to_bytes(), [12, 34, 56]);
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(171, 205, 239).to_string(), "#abcdef");
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("#12".parse::<Rgb>().is_err());
        assert!("zzzzzz".parse::<Rgb>().is_err());
    }
}
