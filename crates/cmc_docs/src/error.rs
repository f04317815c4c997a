//! Error types for the page layer

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse docs config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize docs config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Primary clipboard path failures. These route to the legacy fallback.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,

    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
