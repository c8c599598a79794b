use color_metrics::{
    contrast_against_black, contrast_against_white, rgb_to_hex, rgb_to_hsl, QuantizedRgb,
};
use serde::{Deserialize, Serialize};

/// One enumerated color with its derived metrics.
///
/// `red`, `green` and `blue` are the raw quantized channel values. Every
/// other field is computed from the color scaled to 8 bits per channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRecord {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    pub hex: String,
    pub hue_degrees: u16,
    pub saturation_percentage: f64,
    pub lightness_percentage: f64,
    pub contrast_ratio_against_white: f64,
    pub contrast_ratio_against_black: f64,
}

impl ColorRecord {
    pub fn from_quantized(color: QuantizedRgb) -> Self {
        let rgb = color.to_rgb8();
        let hsl = rgb_to_hsl(rgb);

        Self {
            red: color.red(),
            green: color.green(),
            blue: color.blue(),
            hex: rgb_to_hex(rgb),
            hue_degrees: hsl.hue,
            saturation_percentage: hsl.saturation,
            lightness_percentage: hsl.lightness,
            contrast_ratio_against_white: contrast_against_white(rgb),
            contrast_ratio_against_black: contrast_against_black(rgb),
        }
    }

    /// Raw (red, green, blue) channel triple
    pub fn channels(&self) -> (u16, u16, u16) {
        (self.red, self.green, self.blue)
    }
}
