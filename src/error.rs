use std::path::PathBuf;

use color_metrics::ColorError;
use thiserror::Error;

use crate::services::enumerator::EnumeratorState;

/// A batch could not be persisted. Fatal for the current run.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize batch to {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Batch writer rejected batch {sequence}: {reason}")]
    Rejected { sequence: u64, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum EnumerationError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Batch buffer overflow (capacity {capacity})")]
    BatchOverflow { capacity: usize },

    #[error("Enumerator cannot start from state {state:?}")]
    NotIdle { state: EnumeratorState },
}
