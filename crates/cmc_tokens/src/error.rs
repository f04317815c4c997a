//! Export errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize tokens as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize tokens as TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}
