pub mod color_record;
pub mod config;

pub use color_record::ColorRecord;
pub use config::{ConfigOverrides, EnumerationConfig};
