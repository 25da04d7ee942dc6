//! Symbology error types.

use sg_registry::RegistryError;
use sg_style::StyleError;
use thiserror::Error;

/// Errors that abort a symbol rebuild.
#[derive(Debug, Error)]
pub enum SymbologyError {
    /// Classification key lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Style record lookup or decoding failed.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// A recognized layer lacks a field its rebuilt form requires.
    #[error("symbol layer {index} ({type_name}) cannot be rebuilt: {reason}")]
    InvalidLayer {
        index: usize,
        type_name: String,
        reason: String,
    },
}
