//! Layer documents: a feature table plus an optional renderer definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sg_core::Renderer;

use crate::error::LayerError;

/// Attribute field data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Integer,
    Double,
    Date,
}

/// Attribute field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// One map feature. Geometry is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Feature {
    pub id: u64,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
}

/// A map layer as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LayerDocument {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<Renderer>,
}

impl LayerDocument {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// # Errors
    ///
    /// Returns `LayerError::UnknownField` if the layer has no such field.
    pub fn require_field(&self, name: &str) -> Result<&FieldDef, LayerError> {
        self.field(name).ok_or_else(|| LayerError::UnknownField {
            name: name.to_string(),
            layer: self.name.clone(),
        })
    }

    /// Add a field, initializing it to `null` on every feature.
    ///
    /// # Errors
    ///
    /// Returns `LayerError::FieldExists` if a field of that name is already
    /// defined; the document is left unchanged.
    pub fn add_field(&mut self, name: &str, field_type: FieldType) -> Result<(), LayerError> {
        if self.field(name).is_some() {
            return Err(LayerError::FieldExists {
                name: name.to_string(),
            });
        }
        self.fields.push(FieldDef {
            name: name.to_string(),
            field_type,
        });
        for feature in &mut self.features {
            feature.attributes.insert(name.to_string(), Value::Null);
        }
        Ok(())
    }

    /// Compute `target` from `source` on every feature.
    ///
    /// A feature without a `source` attribute passes `null` to `f`. Every
    /// value is computed before any is written, so an error from `f` leaves
    /// the document untouched.
    ///
    /// Returns the number of features written.
    ///
    /// # Errors
    ///
    /// Returns `LayerError::UnknownField` (converted into `E`) when either
    /// field is undefined, or the first error returned by `f`.
    pub fn calculate_field<F, E>(&mut self, target: &str, source: &str, mut f: F) -> Result<usize, E>
    where
        F: FnMut(&Feature, &Value) -> Result<Value, E>,
        E: From<LayerError>,
    {
        self.require_field(source)?;
        self.require_field(target)?;

        let values = self
            .features
            .iter()
            .map(|feature| {
                let raw = feature.attributes.get(source).unwrap_or(&Value::Null);
                f(feature, raw)
            })
            .collect::<Result<Vec<_>, E>>()?;

        let written = values.len();
        for (feature, value) in self.features.iter_mut().zip(values) {
            feature.attributes.insert(target.to_string(), value);
        }
        Ok(written)
    }
}
