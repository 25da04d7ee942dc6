//! Classification keys, short codes, and registry entries.
//!
//! A classification key is the hierarchical identifier of a surficial-geology
//! map unit, e.g. `3.01.15.001`: four dot-separated, all-digit segments. The
//! short code (`Isn`) is the compact display code drawn on maps.

use std::borrow::Borrow;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Number of dot-separated segments in a classification key.
pub const KEY_SEGMENTS: usize = 4;

// ---------------------------------------------------------------------------
// ClassificationKey
// ---------------------------------------------------------------------------

/// Hierarchical identifier of a surficial-geology map unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ClassificationKey(String);

impl ClassificationKey {
    /// Parse and validate a classification key.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MalformedKey` unless the input has exactly four
    /// non-empty, all-digit segments separated by `.`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() != KEY_SEGMENTS {
            return Err(CoreError::MalformedKey {
                key: raw.to_string(),
                reason: format!("expected {KEY_SEGMENTS} segments, found {}", segments.len()),
            });
        }
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(CoreError::MalformedKey {
                key: raw.to_string(),
                reason: format!("segment '{bad}' is not numeric"),
            });
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassificationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ClassificationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// ShortCode
// ---------------------------------------------------------------------------

/// Abbreviated display code for a classification (e.g. `Isn`, `GLd`, `R1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// # Errors
    ///
    /// Returns `CoreError::MalformedCode` for an empty code or one containing
    /// whitespace.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(CoreError::MalformedCode {
                code: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ShortCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// CodeEntry
// ---------------------------------------------------------------------------

/// One row of the code registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CodeEntry {
    pub key: ClassificationKey,
    pub short_code: ShortCode,
    pub description: String,
}

impl CodeEntry {
    /// Legend label: the description, optionally followed by ` (<code>)`.
    #[must_use]
    pub fn label(&self, include_code: bool) -> String {
        if include_code {
            format!("{} ({})", self.description, self.short_code)
        } else {
            self.description.clone()
        }
    }
}
