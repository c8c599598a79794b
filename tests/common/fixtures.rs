//! Test fixtures and helpers.

use color_atlas::models::EnumerationConfig;
use std::path::Path;

/// Config for a small run writing into `output_dir`
pub fn small_config(
    bits: u8,
    batch_size: usize,
    progress_interval: u64,
    output_dir: &Path,
) -> EnumerationConfig {
    EnumerationConfig {
        bits_per_channel: bits,
        batch_size,
        progress_interval,
        output_dir: output_dir.to_path_buf(),
        pretty: false,
    }
}

/// Every (r, g, b) triple at the given depth in lexicographic order
pub fn lexicographic_triples(bits: u8) -> Vec<(u16, u16, u16)> {
    let limit = 1u16 << bits;
    let mut triples = Vec::with_capacity(usize::from(limit).pow(3));
    for r in 0..limit {
        for g in 0..limit {
            for b in 0..limit {
                triples.push((r, g, b));
            }
        }
    }
    triples
}
