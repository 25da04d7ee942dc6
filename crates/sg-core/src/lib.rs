//! # sg-core
//!
//! Core types and error types for sgsym.
//!
//! This crate provides the foundational types shared across all sgsym crates:
//! - Classification keys and short codes for surficial-geology map units
//! - Symbol layer variants decoded from style records
//! - Categorical renderer definitions (groups and classes)
//! - Cross-cutting error types

pub mod errors;
pub mod keys;
pub mod render;
pub mod symbols;

pub use errors::CoreError;
pub use keys::{ClassificationKey, CodeEntry, ShortCode};
pub use render::{RenderClass, RenderGroup, Renderer};
pub use symbols::{CharacterMarker, DecodedLayer, LayerKind, SolidFill, SymbolLayer};
