//! WCAG relative luminance and contrast ratio
//!
//! Luminance uses the WCAG 2.x definition: each sRGB channel is linearized
//! (with the 0.03928 threshold from the WCAG text rather than the 0.04045 of
//! IEC 61966-2-1) and weighted by the Rec. 709 coefficients.

use crate::color::Rgb;

/// Channel values at or below this threshold use the linear segment.
const LINEAR_SEGMENT_THRESHOLD: f64 = 0.03928;

/// Flare term added to both luminances in the contrast ratio.
const FLARE: f64 = 0.05;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

#[inline]
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v > LINEAR_SEGMENT_THRESHOLD {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// Relative luminance of an 8-bit color, in `0.0..=1.0`.
///
/// ```
/// use color_metrics::{relative_luminance, Rgb};
///
/// assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
/// assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
/// ```
pub fn relative_luminance(color: Rgb) -> f64 {
    RED_WEIGHT * linearize(color.red)
        + GREEN_WEIGHT * linearize(color.green)
        + BLUE_WEIGHT * linearize(color.blue)
}

/// Contrast ratio between two colors, in `1.0..=21.0`.
///
/// Symmetric in its arguments: the lighter color is always the numerator.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + FLARE) / (lo + FLARE)
}

/// Contrast ratio of `color` against pure white.
pub fn contrast_against_white(color: Rgb) -> f64 {
    contrast_ratio(color, Rgb::WHITE)
}

/// Contrast ratio of `color` against pure black.
pub fn contrast_against_black(color: Rgb) -> f64 {
    contrast_ratio(color, Rgb::BLACK)
}
