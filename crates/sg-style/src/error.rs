//! Style store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from style stores and style-record decoding.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The store has no record whose label matches exactly.
    #[error("no style record labelled '{label}'")]
    NotFound { label: String },

    /// The style database file does not exist.
    #[error("style database not found at {}", path.display())]
    MissingFile { path: PathBuf },

    /// A zero-length payload has no trailing sentinel byte to strip.
    #[error("style record '{label}' has an empty payload")]
    EmptyPayload { label: String },

    /// The payload is not a valid style definition.
    #[error("failed to decode style payload: {0}")]
    Decode(String),

    /// The payload is not valid JSON.
    #[error("invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
