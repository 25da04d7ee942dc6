//! Cross-cutting error types for sgsym.
//!
//! Domain-specific errors (e.g., `RegistryError`, `StyleError`) are defined in
//! their respective crates. The CLI converges everything on `anyhow`.

use thiserror::Error;

/// Errors that can be raised while building core values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A classification key is not four dot-separated numeric segments.
    #[error("Malformed classification key '{key}': {reason}")]
    MalformedKey { key: String, reason: String },

    /// A short code was empty or contained whitespace.
    #[error("Malformed short code '{code}'")]
    MalformedCode { code: String },
}
