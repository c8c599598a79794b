//! Color Atlas
//!
//! Enumerates every color of a quantized RGB cube, computes hex, HSL and
//! WCAG contrast metrics for each, and writes the records out in bounded
//! batches. The color math itself lives in the `color-metrics` crate.

pub mod error;
pub mod models;
pub mod services;
