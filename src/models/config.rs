use color_metrics::{channel_limit, MAX_BITS_PER_CHANNEL};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Enumeration settings, loaded from a YAML file and/or CLI flags
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EnumerationConfig {
    /// Quantization depth per channel (1..=8)
    #[serde(default = "default_bits_per_channel")]
    pub bits_per_channel: u8,

    /// Maximum number of records per flushed batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Emit a progress signal every this many colors
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,

    /// Directory receiving the batch files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Pretty-print batch JSON
    #[serde(default)]
    pub pretty: bool,
}

fn default_bits_per_channel() -> u8 {
    8
}

fn default_batch_size() -> usize {
    1_000_000
}

fn default_progress_interval() -> u64 {
    100_000
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Values supplied on the command line; `None` keeps the configured value
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub bits_per_channel: Option<u8>,
    pub batch_size: Option<usize>,
    pub progress_interval: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub pretty: bool,
}

impl EnumerationConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            bits_per_channel = config.bits_per_channel,
            batch_size = config.batch_size,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(bits) = overrides.bits_per_channel {
            self.bits_per_channel = bits;
        }
        if let Some(batch_size) = overrides.batch_size {
            self.batch_size = batch_size;
        }
        if let Some(interval) = overrides.progress_interval {
            self.progress_interval = interval;
        }
        if let Some(ref dir) = overrides.output_dir {
            self.output_dir = dir.clone();
        }
        self.pretty |= overrides.pretty;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bits_per_channel == 0 || self.bits_per_channel > MAX_BITS_PER_CHANNEL {
            return Err(ConfigError::Invalid(format!(
                "bits_per_channel must be in 1..={MAX_BITS_PER_CHANNEL}, got {}",
                self.bits_per_channel
            )));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(ConfigError::Invalid(
                "progress_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Discrete levels per channel (`2^bits_per_channel`)
    pub fn channel_limit(&self) -> Result<u16, ConfigError> {
        channel_limit(self.bits_per_channel).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Number of colors an enumeration at this depth produces
    pub fn total_colors(&self) -> Result<u64, ConfigError> {
        Ok(u64::from(self.channel_limit()?).pow(3))
    }
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            bits_per_channel: default_bits_per_channel(),
            batch_size: default_batch_size(),
            progress_interval: default_progress_interval(),
            output_dir: default_output_dir(),
            pretty: false,
        }
    }
}
