//! Style records and symbol-layer decoding.

use serde_json::Value;
use sg_core::DecodedLayer;

use crate::error::StyleError;

/// Top-level field holding the ordered layer list.
const SYMBOL_LAYERS_FIELD: &str = "symbolLayers";

/// A raw style record as stored, sentinel byte included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRecord {
    label: String,
    payload: Vec<u8>,
}

impl StyleRecord {
    #[must_use]
    pub fn new(label: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The payload exactly as stored.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The payload with its trailing sentinel byte removed.
    ///
    /// Exactly one byte is stripped, whatever its value; the sentinel is
    /// assumed to be a single byte (NUL in style databases). A multi-byte
    /// final character would leave its leading bytes behind. A one-byte
    /// payload yields empty content.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::EmptyPayload` for a zero-length payload.
    pub fn content(&self) -> Result<&[u8], StyleError> {
        match self.payload.split_last() {
            Some((_, content)) => Ok(content),
            None => Err(StyleError::EmptyPayload {
                label: self.label.clone(),
            }),
        }
    }

    /// Strip the sentinel and decode the layer list.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::content`] and [`decode_symbol_layers`].
    pub fn decode_layers(&self) -> Result<Vec<DecodedLayer>, StyleError> {
        decode_symbol_layers(self.content()?)
    }
}

/// Parse a style definition into its ordered layer descriptors.
///
/// Empty or all-whitespace content decodes to no layers. Otherwise the
/// content must be a JSON object whose `symbolLayers` array holds objects with
/// a string `type` discriminator.
///
/// # Errors
///
/// Returns `StyleError::Json` for invalid JSON and `StyleError::Decode` when
/// the structure does not match.
pub fn decode_symbol_layers(content: &[u8]) -> Result<Vec<DecodedLayer>, StyleError> {
    if content.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!("empty style content; decoding as no layers");
        return Ok(Vec::new());
    }

    let root: Value = serde_json::from_slice(content)?;
    let Value::Object(mut root) = root else {
        return Err(StyleError::Decode(
            "style definition is not a JSON object".to_string(),
        ));
    };

    let layers = match root.remove(SYMBOL_LAYERS_FIELD) {
        Some(Value::Array(layers)) => layers,
        Some(_) => {
            return Err(StyleError::Decode(format!(
                "'{SYMBOL_LAYERS_FIELD}' is not an array"
            )));
        }
        None => {
            return Err(StyleError::Decode(format!(
                "missing '{SYMBOL_LAYERS_FIELD}' field"
            )));
        }
    };

    layers
        .into_iter()
        .enumerate()
        .map(|(index, layer)| {
            let Value::Object(fields) = layer else {
                return Err(StyleError::Decode(format!(
                    "symbol layer {index} is not an object"
                )));
            };
            let type_name = match fields.get("type") {
                Some(Value::String(name)) => name.clone(),
                _ => {
                    return Err(StyleError::Decode(format!(
                        "symbol layer {index} has no string 'type'"
                    )));
                }
            };
            Ok(DecodedLayer::new(type_name, fields))
        })
        .collect()
}
