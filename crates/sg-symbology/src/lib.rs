//! # sg-symbology
//!
//! Rebuilds legend classes from style records.
//!
//! For each class of a unique-value renderer the [`Rebuilder`]:
//! 1. resolves the class's classification key to its legend label,
//! 2. fetches the matching style record and decodes its layer list,
//! 3. keeps solid fills and character markers (whitelisted fields only) and
//!    drops every other layer kind with a warning,
//! 4. returns a replacement class with the new label and layers.
//!
//! Rebuilding never mutates its input; callers commit the returned values.

mod error;
mod rebuild;

pub use error::SymbologyError;
pub use rebuild::{DroppedLayer, RebuiltLayers, rebuild_layers};

use chrono::Utc;
use serde::Serialize;
use sg_core::{RenderClass, RenderGroup, Renderer};
use sg_registry::CodeRegistry;
use sg_style::{StyleStore, fetch_style_record};

/// A dropped layer attributed to the class it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDrop {
    pub key: String,
    #[serde(flatten)]
    pub layer: DroppedLayer,
}

/// Result of rebuilding one class.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedClass {
    pub class: RenderClass,
    pub dropped: Vec<DroppedLayer>,
}

/// Result of rebuilding every class of a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedRenderer {
    pub renderer: Renderer,
    pub dropped: Vec<ClassDrop>,
}

/// Rebuilds render classes against a code registry and a style store.
pub struct Rebuilder<'a> {
    registry: &'a CodeRegistry,
    store: &'a dyn StyleStore,
}

impl<'a> Rebuilder<'a> {
    #[must_use]
    pub fn new(registry: &'a CodeRegistry, store: &'a dyn StyleStore) -> Self {
        Self { registry, store }
    }

    /// Rebuild one class for classification key `key`.
    ///
    /// The label is resolved before the style store is consulted, so an
    /// unknown key fails without a style lookup.
    ///
    /// # Errors
    ///
    /// Returns `SymbologyError::Registry` for an unknown key,
    /// `SymbologyError::Style` for a missing or undecodable style record, and
    /// `SymbologyError::InvalidLayer` for a recognized layer that cannot be
    /// rebuilt.
    pub fn apply_to_class(
        &self,
        class: RenderClass,
        key: &str,
        include_code: bool,
    ) -> Result<AppliedClass, SymbologyError> {
        let label = self.registry.format_label(key, include_code)?;
        let record = fetch_style_record(self.store, key)?;
        let RebuiltLayers { layers, dropped } = rebuild_layers(record.decode_layers()?)?;

        tracing::debug!(
            key,
            label = %label,
            layers = layers.len(),
            dropped = dropped.len(),
            "class rebuilt"
        );

        Ok(AppliedClass {
            class: RenderClass {
                label,
                symbol_layers: layers,
                ..class
            },
            dropped,
        })
    }

    /// Rebuild every class of `renderer`, using each class's current label as
    /// its classification key.
    ///
    /// Either every class is rebuilt or an error is returned; the input is
    /// consumed and no partially rebuilt renderer escapes.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Self::apply_to_class`].
    pub fn apply_to_renderer(
        &self,
        renderer: Renderer,
        include_code: bool,
    ) -> Result<AppliedRenderer, SymbologyError> {
        let mut dropped = Vec::new();
        let mut groups = Vec::with_capacity(renderer.groups.len());

        for group in renderer.groups {
            let mut classes = Vec::with_capacity(group.classes.len());
            for class in group.classes {
                let key = class.label.clone();
                let applied = self.apply_to_class(class, &key, include_code)?;
                dropped.extend(applied.dropped.into_iter().map(|layer| ClassDrop {
                    key: key.clone(),
                    layer,
                }));
                classes.push(applied.class);
            }
            groups.push(RenderGroup {
                heading: group.heading,
                classes,
            });
        }

        Ok(AppliedRenderer {
            renderer: Renderer {
                fields: renderer.fields,
                groups,
                applied_at: Some(Utc::now()),
            },
            dropped,
        })
    }
}
