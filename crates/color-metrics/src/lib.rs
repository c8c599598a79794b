//! color-metrics: color-space conversions and WCAG photometrics
//!
//! Pure functions over value types, with no I/O and no shared state:
//!
//! - [`rgb_to_hex`], [`hex_to_rgb`], [`int_to_hex_byte`]: hex encoding
//! - [`rgb_to_hsl`]: hue / saturation / lightness
//! - [`relative_luminance`], [`contrast_ratio`]: WCAG 2.x photometrics
//! - [`QuantizedRgb`]: colors at 1..=8 bits per channel, scaled to 8 bits
//!   before any metric is computed
//!
//! # Quick Start
//!
//! ```
//! use color_metrics::{contrast_against_white, rgb_to_hsl, QuantizedRgb};
//!
//! // Level 2 of 4 on the red channel at 2 bits per channel
//! let color = QuantizedRgb::new(2, 0, 0, 2).unwrap().to_rgb8();
//! assert_eq!(color.to_string(), "#aa0000");
//!
//! let hsl = rgb_to_hsl(color);
//! assert_eq!(hsl.hue, 0);
//! assert!(contrast_against_white(color) > 4.5);
//! ```

pub mod color;
pub mod error;
pub mod photometrics;
pub mod random;


pub use color::{
    channel_limit, hex_to_rgb, int_to_hex_byte, rgb_to_hex, rgb_to_hsl, Hsl, QuantizedRgb, Rgb,
    MAX_BITS_PER_CHANNEL,
};
pub use error::{ColorError, FormatError};
pub use photometrics::{
    contrast_against_black, contrast_against_white, contrast_ratio, relative_luminance,
};
pub use random::{random_hex, random_hsl, random_rgb};
