//! # sg-layer
//!
//! File-backed map layers for the symbol rebuilder.
//!
//! A layer is a JSON [`LayerDocument`]: field definitions, features with
//! attribute maps, and an optional unique-value [`Renderer`](sg_core::Renderer).
//! [`FileLayerStore`] resolves layer names against a directory and commits
//! changes atomically.

mod document;
mod error;
mod renderer;
mod store;

pub use document::{Feature, FieldDef, FieldType, LayerDocument};
pub use error::LayerError;
pub use renderer::unique_value_renderer;
pub use store::{FileLayerStore, LayerStore};
