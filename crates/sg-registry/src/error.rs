//! Registry error types.

use sg_core::CoreError;
use thiserror::Error;

/// Errors raised by code registry construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The classification key has no registry entry.
    #[error("unknown classification key '{key}'")]
    UnknownKey { key: String },

    /// No classification uses this short code.
    #[error("unknown short code '{code}'")]
    UnknownCode { code: String },

    /// The same key appears on more than one row of the table.
    #[error("duplicate classification key '{key}' in code table")]
    DuplicateKey { key: String },

    /// Two keys share a short code, which breaks the reverse lookup.
    #[error("short code '{code}' is used by both '{first}' and '{second}'")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },

    /// A row has an empty description.
    #[error("classification key '{key}' has an empty description")]
    EmptyDescription { key: String },

    /// A key or code on a table row failed validation.
    #[error("invalid code table row: {0}")]
    InvalidRow(#[from] CoreError),
}
