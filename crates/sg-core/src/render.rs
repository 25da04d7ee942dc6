//! Categorical (unique-value) renderer definitions.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::symbols::SymbolLayer;

/// One legend category: the field values it covers, its label, and its symbol.
///
/// A renderer built by grouping on the derived code field labels each class
/// with its classification key; the rebuilder replaces that label with the
/// human-readable description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenderClass {
    pub values: Vec<String>,
    pub label: String,
    #[serde(default)]
    pub symbol_layers: Vec<SymbolLayer>,
}

impl RenderClass {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
            label: label.into(),
            symbol_layers: Vec::new(),
        }
    }
}

/// A titled group of classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenderGroup {
    pub heading: String,
    pub classes: Vec<RenderClass>,
}

/// A unique-value renderer keyed by one or more attribute fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Renderer {
    pub fields: Vec<String>,
    pub groups: Vec<RenderGroup>,
    /// When the symbology was last rebuilt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
}

impl Renderer {
    /// All classes across groups, in legend order.
    pub fn classes(&self) -> impl Iterator<Item = &RenderClass> {
        self.groups.iter().flat_map(|group| group.classes.iter())
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.groups.iter().map(|group| group.classes.len()).sum()
    }
}
