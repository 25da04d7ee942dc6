//! General settings.

use serde::{Deserialize, Serialize};

/// Name of the derived short-code field added to layers.
pub const DEFAULT_CODE_FIELD: &str = "SYMBOL_CODE";

fn default_code_field() -> String {
    DEFAULT_CODE_FIELD.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Field that receives the short code and drives the renderer.
    #[serde(default = "default_code_field")]
    pub code_field: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            code_field: default_code_field(),
        }
    }
}
