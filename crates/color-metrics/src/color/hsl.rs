//! RGB to HSL conversion

use std::fmt;

use super::rgb::Rgb;

/// A color in HSL form.
///
/// Hue is whole degrees in `0..360`. Saturation and lightness are
/// percentages in `0.0..=100.0`, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees
    pub hue: u16,
    /// Saturation percentage
    pub saturation: f64,
    /// Lightness percentage
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {:.1}%, {:.1}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Convert an 8-bit RGB color to HSL.
///
/// The red-max hue sector uses Euclidean remainder, so the intermediate hue
/// is never negative. A hue that rounds up to 360 wraps to 0.
///
/// ```
/// use color_metrics::{rgb_to_hsl, Rgb};
///
/// let hsl = rgb_to_hsl(Rgb::new(0, 0, 255));
/// assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (240, 100.0, 50.0));
/// ```
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let Rgb { red, green, blue } = color;
    let cmax = red.max(green).max(blue);
    let cmin = red.min(green).min(blue);

    let r = normalize(red);
    let g = normalize(green);
    let b = normalize(blue);
    let max = normalize(cmax);
    let min = normalize(cmin);
    let delta = max - min;

    // Compare on the integer channels; float equality would misfire on ties.
    let sector = if cmax == cmin {
        0.0
    } else if cmax == red {
        ((g - b) / delta).rem_euclid(6.0)
    } else if cmax == green {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let hue = ((sector * 60.0).round() as u16) % 360;

    let lightness = (max + min) / 2.0;
    let saturation = if cmax == cmin {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    Hsl {
        hue,
        saturation: round_to_tenth(saturation * 100.0),
        lightness: round_to_tenth(lightness * 100.0),
    }
}

#[inline]
fn normalize(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

#[inline]
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(r: u8, g: u8, b: u8) -> (u16, f64, f64) {
        let hsl = rgb_to_hsl(Rgb::new(r, g, b));
        (hsl.hue, hsl.saturation, hsl.lightness)
    }

    #[test]
    fn test_black_and_white() {
        assert_eq!(hsl(0, 0, 0), (0, 0.0, 0.0));
        assert_eq!(hsl(255, 255, 255), (0, 0.0, 100.0));
    }

    #[test]
    fn test_primaries_and_secondaries() {
        assert_eq!(hsl(255, 0, 0), (0, 100.0, 50.0));
        assert_eq!(hsl(0, 255, 0), (120, 100.0, 50.0));
        assert_eq!(hsl(0, 0, 255), (240, 100.0, 50.0));
        assert_eq!(hsl(255, 255, 0), (60, 100.0, 50.0));
        assert_eq!(hsl(0, 255, 255), (180, 100.0, 50.0));
        assert_eq!(hsl(255, 0, 255), (300, 100.0, 50.0));
    }

    #[test]
    fn test_red_max_with_blue_above_green() {
        // (g - b) / delta is negative here; Euclidean remainder keeps it in [0, 6)
        assert_eq!(hsl(255, 0, 128).0, 330);
        assert_eq!(hsl(200, 50, 100).0, 340);
    }

    #[test]
    fn test_hue_near_360_wraps_to_zero() {
        // Raw hue is 359.76 degrees, which rounds to 360
        assert_eq!(hsl(255, 0, 1).0, 0);
    }

    #[test]
    fn test_exact_half_degree_rounds_up() {
        // Sector is exactly 5.125, so the raw hue is 307.5 degrees
        assert_eq!(hsl(34, 26, 33).0, 308);
    }

    #[test]
    fn test_grays_have_no_hue_or_saturation() {
        for v in 0..=255u8 {
            let (h, s, _) = hsl(v, v, v);
            assert_eq!(h, 0);
            assert_eq!(s, 0.0);
        }
    }

    #[test]
    fn test_mid_gray_lightness_rounds_to_tenth() {
        assert_eq!(hsl(128, 128, 128).2, 50.2);
        assert_eq!(hsl(1, 1, 1).2, 0.4);
    }

    #[test]
    fn test_known_color() {
        // #542cfa
        assert_eq!(hsl(84, 44, 250), (252, 95.4, 57.6));
    }

    #[test]
    fn test_display() {
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_eq!(hsl.to_string(), "hsl(0, 100.0%, 50.0%)");
    }
}
