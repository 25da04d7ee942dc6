//! Unique-value classification of a layer.

use std::collections::BTreeSet;

use serde_json::Value;
use sg_core::{RenderClass, RenderGroup, Renderer};

use crate::document::LayerDocument;
use crate::error::LayerError;

/// Group a layer by the distinct values of `field`.
///
/// Produces one class per distinct non-null value, sorted by value, in a single
/// group headed by the field name. Each class is labelled `label_for(value)`.
///
/// # Errors
///
/// Returns `LayerError::UnknownField` (converted into `E`) if the field is not
/// defined, or the first error returned by `label_for`.
pub fn unique_value_renderer<F, E>(
    document: &LayerDocument,
    field: &str,
    mut label_for: F,
) -> Result<Renderer, E>
where
    F: FnMut(&str) -> Result<String, E>,
    E: From<LayerError>,
{
    document.require_field(field)?;

    let values: BTreeSet<String> = document
        .features
        .iter()
        .filter_map(|feature| match feature.attributes.get(field)? {
            Value::Null => None,
            Value::String(value) => Some(value.clone()),
            other => Some(other.to_string()),
        })
        .collect();

    let classes = values
        .into_iter()
        .map(|value| {
            let label = label_for(&value)?;
            Ok(RenderClass::new(value, label))
        })
        .collect::<Result<Vec<_>, E>>()?;

    tracing::debug!(field, classes = classes.len(), "unique-value renderer built");

    Ok(Renderer {
        fields: vec![field.to_string()],
        groups: vec![RenderGroup {
            heading: field.to_string(),
            classes,
        }],
        applied_at: None,
    })
}
