//! # sg-registry
//!
//! Static, bidirectional mapping between surficial-geology classification keys,
//! their short map codes, and their legend descriptions.
//!
//! The table is compiled into the binary (see [`table`]) and validated once,
//! the first time [`CodeRegistry::builtin`] is called. Validation rejects
//! duplicate keys, duplicate short codes, malformed keys and empty
//! descriptions, so a registry that loads is a closed, paired vocabulary.
//!
//! ```
//! use sg_registry::CodeRegistry;
//!
//! let registry = CodeRegistry::builtin().expect("embedded table is valid");
//! assert_eq!(registry.short_code("3.01.15.001").unwrap().as_str(), "Isn");
//! assert_eq!(
//!     registry.format_label("3.01.15.001", true).unwrap(),
//!     "Glacier Ice or Snowpack: snowpacks (Isn)"
//! );
//! ```

mod error;
pub mod table;

pub use error::RegistryError;
pub use table::SCHEME_VERSION;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde_json::Value;
use sg_core::{ClassificationKey, CodeEntry, ShortCode};

static BUILTIN: LazyLock<Result<CodeRegistry, RegistryError>> =
    LazyLock::new(|| CodeRegistry::from_rows(table::ENTRIES));

/// Immutable code registry with O(1) lookups in both directions.
#[derive(Debug, Clone)]
pub struct CodeRegistry {
    /// Entries in table order
    entries: Vec<CodeEntry>,
    /// Classification key -> index into `entries`
    by_key: HashMap<ClassificationKey, usize>,
    /// Short code -> index into `entries`
    by_code: HashMap<ShortCode, usize>,
}

impl CodeRegistry {
    /// The registry built from the embedded scheme table.
    ///
    /// # Errors
    ///
    /// Returns the integrity error found in the embedded table, if any. The
    /// same error is returned on every call.
    pub fn builtin() -> Result<&'static Self, RegistryError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Build and validate a registry from `(key, short_code, description)` rows.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` on the first integrity defect found.
    pub fn from_rows(rows: &[(&str, &str, &str)]) -> Result<Self, RegistryError> {
        let mut entries = Vec::with_capacity(rows.len());
        let mut by_key = HashMap::with_capacity(rows.len());
        let mut by_code: HashMap<ShortCode, usize> = HashMap::with_capacity(rows.len());

        for (idx, (key, code, description)) in rows.iter().enumerate() {
            let key = ClassificationKey::parse(key)?;
            let short_code = ShortCode::parse(code)?;

            if description.trim().is_empty() {
                return Err(RegistryError::EmptyDescription {
                    key: key.to_string(),
                });
            }
            if by_key.contains_key(&key) {
                return Err(RegistryError::DuplicateKey {
                    key: key.to_string(),
                });
            }
            if let Some(&first) = by_code.get(&short_code) {
                let first: &CodeEntry = &entries[first];
                return Err(RegistryError::DuplicateCode {
                    code: short_code.to_string(),
                    first: first.key.to_string(),
                    second: key.to_string(),
                });
            }

            by_key.insert(key.clone(), idx);
            by_code.insert(short_code.clone(), idx);
            entries.push(CodeEntry {
                key,
                short_code,
                description: (*description).to_string(),
            });
        }

        tracing::debug!(entries = entries.len(), "code registry loaded");

        Ok(Self {
            entries,
            by_key,
            by_code,
        })
    }

    /// Full registry entry for a key.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownKey` if the key is not in the table.
    pub fn entry(&self, key: &str) -> Result<&CodeEntry, RegistryError> {
        self.by_key
            .get(key)
            .map(|&idx| &self.entries[idx])
            .ok_or_else(|| RegistryError::UnknownKey {
                key: key.to_string(),
            })
    }

    /// Short map code for a key.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownKey` if the key is not in the table.
    pub fn short_code(&self, key: &str) -> Result<&ShortCode, RegistryError> {
        self.entry(key).map(|entry| &entry.short_code)
    }

    /// Legend description for a key.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownKey` if the key is not in the table.
    pub fn description(&self, key: &str) -> Result<&str, RegistryError> {
        self.entry(key).map(|entry| entry.description.as_str())
    }

    /// Legend label: `description` or `description (code)`.
    ///
    /// The `" (" + code + ")"` suffix format is relied on by downstream
    /// legend tooling and must not change.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownKey` if the key is not in the table.
    pub fn format_label(&self, key: &str, include_code: bool) -> Result<String, RegistryError> {
        self.entry(key).map(|entry| entry.label(include_code))
    }

    /// Reverse lookup: the classification key that owns a short code.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownCode` if no entry uses the code.
    pub fn key_for_code(&self, code: &str) -> Result<&ClassificationKey, RegistryError> {
        self.by_code
            .get(code)
            .map(|&idx| &self.entries[idx].key)
            .ok_or_else(|| RegistryError::UnknownCode {
                code: code.to_string(),
            })
    }

    /// Map one attribute value to its short code.
    ///
    /// Strings are used verbatim and numbers by their textual form; any other
    /// JSON value is rendered as JSON text and so fails as an unknown key.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownKey` if the coerced key is not in the table.
    pub fn classify_value(&self, value: &Value) -> Result<&ShortCode, RegistryError> {
        match value {
            Value::String(key) => self.short_code(key),
            other => self.short_code(&other.to_string()),
        }
    }

    /// All entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
