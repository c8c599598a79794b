//! Color types and conversions
//!
//! - [`Rgb`]: an 8-bit sRGB color, the input to every conversion.
//! - [`QuantizedRgb`]: a color at a reduced bit depth, scaled to [`Rgb`]
//!   before any metric is computed.
//! - [`Hsl`]: hue, saturation and lightness derived from an [`Rgb`].
//!
//! # Example
//!
//! ```
//! use color_metrics::{rgb_to_hsl, Rgb};
//!
//! let orange: Rgb = "#ff8000".parse().unwrap();
//! let hsl = rgb_to_hsl(orange);
//! assert_eq!(hsl.hue, 30);
//! assert_eq!(orange.to_string(), "#ff8000");
//! ```

mod hex;
mod hsl;
mod quantized;
mod rgb;

pub use hex::{hex_to_rgb, int_to_hex_byte, rgb_to_hex};
pub use hsl::{rgb_to_hsl, Hsl};
pub use quantized::{channel_limit, QuantizedRgb, MAX_BITS_PER_CHANNEL};
pub use rgb::Rgb;
