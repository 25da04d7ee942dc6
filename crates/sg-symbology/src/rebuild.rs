//! Layer filtering and field whitelisting.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sg_core::{DecodedLayer, LayerKind, SymbolLayer};

use crate::error::SymbologyError;

/// A layer left out of a rebuilt symbol because its kind is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedLayer {
    /// Position in the decoded layer list.
    pub index: usize,
    pub type_name: String,
}

/// Output of [`rebuild_layers`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RebuiltLayers {
    pub layers: Vec<SymbolLayer>,
    pub dropped: Vec<DroppedLayer>,
}

/// Rebuild decoded layers into their whitelisted forms.
///
/// Solid fills keep `enable` and `color`; character markers keep their
/// fourteen placement and glyph fields. Everything else on a recognized layer
/// is discarded. Unrecognized kinds are dropped and reported; the remaining
/// layers keep their relative order with no gaps.
///
/// # Errors
///
/// Returns `SymbologyError::InvalidLayer` when a recognized layer lacks a
/// whitelisted field or carries one with the wrong type.
pub fn rebuild_layers(decoded: Vec<DecodedLayer>) -> Result<RebuiltLayers, SymbologyError> {
    let mut rebuilt = RebuiltLayers::default();

    for (index, layer) in decoded.into_iter().enumerate() {
        match layer.kind {
            LayerKind::SolidFill => {
                let fill = whitelist(index, &layer.type_name, layer.fields)?;
                rebuilt.layers.push(SymbolLayer::SolidFill(fill));
            }
            LayerKind::CharacterMarker => {
                let marker = whitelist(index, &layer.type_name, layer.fields)?;
                rebuilt.layers.push(SymbolLayer::CharacterMarker(marker));
            }
            LayerKind::Other(type_name) => {
                tracing::warn!(index, type_name = %type_name, "unsupported symbol layer dropped");
                tracing::debug!(layer = %serde_json::Value::Object(layer.fields), "dropped layer content");
                rebuilt.dropped.push(DroppedLayer { index, type_name });
            }
        }
    }

    Ok(rebuilt)
}

fn whitelist<T: DeserializeOwned>(
    index: usize,
    type_name: &str,
    fields: serde_json::Map<String, Value>,
) -> Result<T, SymbologyError> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| SymbologyError::InvalidLayer {
        index,
        type_name: type_name.to_string(),
        reason: e.to_string(),
    })
}
