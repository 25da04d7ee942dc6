//! Layer error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from layer documents and layer stores.
#[derive(Debug, Error)]
pub enum LayerError {
    /// No layer document could be resolved for the name.
    #[error("layer '{name}' not found (looked for {})", looked_in.display())]
    NotFound { name: String, looked_in: PathBuf },

    /// `add_field` was asked to create a field that already exists.
    #[error("field '{name}' already exists")]
    FieldExists { name: String },

    /// A field referenced by name is not defined on the layer.
    #[error("field '{name}' does not exist on layer '{layer}'")]
    UnknownField { name: String, layer: String },

    /// A per-row value computation failed.
    #[error("feature {feature}: {reason}")]
    Row { feature: String, reason: String },

    /// Filesystem error.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Layer document is not valid JSON for the expected shape.
    #[error("invalid layer document {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Atomic replacement of the layer file failed.
    #[error("failed to commit layer to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}
