//! Random color generation

use rand::Rng;

use crate::color::{rgb_to_hex, rgb_to_hsl, Hsl, Rgb};

/// A uniformly random 8-bit color; every channel covers the full 0..=255.
pub fn random_rgb<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.gen(), rng.gen(), rng.gen())
}

/// A random color formatted as `#rrggbb`.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> String {
    rgb_to_hex(random_rgb(rng))
}

/// A random color in HSL form.
pub fn random_hsl<R: Rng + ?Sized>(rng: &mut R) -> Hsl {
    rgb_to_hsl(random_rgb(rng))
}
