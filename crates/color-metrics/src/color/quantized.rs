//! Colors at reduced quantization depths
//!
//! A depth of `bits` per channel gives `2^bits` discrete levels,
//! `0..=2^bits - 1`. Metrics are defined on 8-bit channels, so quantized
//! colors are spread over the full 0..=255 range by [`QuantizedRgb::to_rgb8`]
//! before conversion: the top level always maps to 255, never to `2^bits - 1`.

use super::rgb::Rgb;
use crate::error::ColorError;

/// Deepest supported quantization, in bits per channel.
pub const MAX_BITS_PER_CHANNEL: u8 = 8;

/// Number of discrete levels per channel at the given depth (`2^bits`).
///
/// ```
/// use color_metrics::channel_limit;
///
/// assert_eq!(channel_limit(2).unwrap(), 4);
/// assert_eq!(channel_limit(8).unwrap(), 256);
/// assert!(channel_limit(0).is_err());
/// ```
pub fn channel_limit(bits: u8) -> Result<u16, ColorError> {
    if bits == 0 || bits > MAX_BITS_PER_CHANNEL {
        return Err(ColorError::UnsupportedDepth(bits));
    }
    Ok(1u16 << bits)
}

/// A color whose channels are quantized to `bits` bits each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantizedRgb {
    red: u16,
    green: u16,
    blue: u16,
    bits: u8,
}

impl QuantizedRgb {
    /// Create a quantized color, validating every channel against the depth.
    ///
    /// Returns [`ColorError::UnsupportedDepth`] if `bits` is not in `1..=8`
    /// and [`ColorError::Domain`] if any channel exceeds `2^bits - 1`.
    pub fn new(red: u16, green: u16, blue: u16, bits: u8) -> Result<Self, ColorError> {
        let max = channel_limit(bits)? - 1;
        for value in [red, green, blue] {
            if value > max {
                return Err(ColorError::Domain {
                    value: u32::from(value),
                    max: u32::from(max),
                });
            }
        }
        Ok(Self {
            red,
            green,
            blue,
            bits,
        })
    }

    #[inline]
    pub fn red(&self) -> u16 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u16 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u16 {
        self.blue
    }

    #[inline]
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Scale each channel into 0..=255 with `round(v * 255 / (2^bits - 1))`.
    ///
    /// At 8 bits per channel this is the identity.
    ///
    /// ```
    /// use color_metrics::{QuantizedRgb, Rgb};
    ///
    /// let color = QuantizedRgb::new(0, 1, 3, 2).unwrap();
    /// assert_eq!(color.to_rgb8(), Rgb::new(0, 85, 255));
    /// ```
    pub fn to_rgb8(&self) -> Rgb {
        let max = (1u32 << self.bits) - 1;
        Rgb::new(
            scale_channel(self.red, max),
            scale_channel(self.green, max),
            scale_channel(self.blue, max),
        )
    }
}

/// Round-half-up integer scaling of `value / max` onto `0..=255`.
#[inline]
fn scale_channel(value: u16, max: u32) -> u8 {
    let scaled = (2 * u32::from(value) * 255 + max) / (2 * max);
    scaled.min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_limit_bounds() {
        assert_eq!(channel_limit(1).unwrap(), 2);
        assert_eq!(channel_limit(3).unwrap(), 8);
        assert_eq!(channel_limit(9), Err(ColorError::UnsupportedDepth(9)));
        assert_eq!(channel_limit(0), Err(ColorError::UnsupportedDepth(0)));
    }

    #[test]
    fn test_new_rejects_out_of_range_channel() {
        assert_eq!(
            QuantizedRgb::new(0, 4, 0, 2),
            Err(ColorError::Domain { value: 4, max: 3 })
        );
        assert_eq!(
            QuantizedRgb::new(0, 0, 256, 8),
            Err(ColorError::Domain {
                value: 256,
                max: 255
            })
        );
    }

    #[test]
    fn test_accessors() {
        let color = QuantizedRgb::new(1, 2, 3, 4).unwrap();
        assert_eq!(
            (color.red(), color.green(), color.blue(), color.bits()),
            (1, 2, 3, 4)
        );
    }

    #[test]
    fn test_eight_bit_scaling_is_identity() {
        for v in 0..=255u16 {
            let color = QuantizedRgb::new(v, v, v, 8).unwrap();
            let byte = v as u8;
            assert_eq!(color.to_rgb8(), Rgb::new(byte, byte, byte));
        }
    }

    #[test]
    fn test_extremes_map_to_black_and_white_at_every_depth() {
        for bits in 1..=MAX_BITS_PER_CHANNEL {
            let top = channel_limit(bits).unwrap() - 1;
            let black = QuantizedRgb::new(0, 0, 0, bits).unwrap();
            let white = QuantizedRgb::new(top, top, top, bits).unwrap();
            assert_eq!(black.to_rgb8(), Rgb::BLACK, "bits={bits}");
            assert_eq!(white.to_rgb8(), Rgb::WHITE, "bits={bits}");
        }
    }

    #[test]
    fn test_three_bit_levels() {
        let levels: Vec<u8> = (0..8)
            .map(|v| QuantizedRgb::new(v, 0, 0, 3).unwrap().to_rgb8().red)
            .collect();
        assert_eq!(levels, vec![0, 36, 73, 109, 146, 182, 219, 255]);
    }
}
