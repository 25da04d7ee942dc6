//! # sg-style
//!
//! Read-only access to style databases and decoding of style records.
//!
//! A style record is keyed by a label (the classification key) and holds a
//! serialized symbol definition. The upstream style-database encoding appends
//! one sentinel byte to every payload; [`StyleRecord::content`] strips it
//! before [`decode_symbol_layers`] parses the layer list.
//!
//! Two stores are provided:
//! - [`MemoryStyleStore`]: built from `(label, payload)` pairs
//! - [`StylxStore`]: loads the `ITEMS` table of a `.stylx` `SQLite` database via libSQL

mod error;
mod memory;
mod record;
mod stylx;

pub use error::StyleError;
pub use memory::MemoryStyleStore;
pub use record::{StyleRecord, decode_symbol_layers};
pub use stylx::StylxStore;

/// A read-only keyed store of raw style payloads.
pub trait StyleStore {
    /// Raw payload for an exact label match.
    fn payload(&self, label: &str) -> Option<&[u8]>;

    /// All labels, sorted.
    fn labels(&self) -> Vec<&str>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Look up the style record for a classification key.
///
/// # Errors
///
/// Returns `StyleError::NotFound` if the store has no record labelled `key`.
pub fn fetch_style_record(store: &dyn StyleStore, key: &str) -> Result<StyleRecord, StyleError> {
    store
        .payload(key)
        .map(|payload| StyleRecord::new(key, payload.to_vec()))
        .ok_or_else(|| StyleError::NotFound {
            label: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_returns_exact_label_match() {
        let store = MemoryStyleStore::from_entries([("3.01.15.001", b"{}\0".to_vec())]);
        let record = fetch_style_record(&store, "3.01.15.001").unwrap();
        assert_eq!(record.label(), "3.01.15.001");
        assert_eq!(record.payload(), b"{}\0");
    }

    #[test]
    fn fetch_missing_label_is_not_found() {
        let store = MemoryStyleStore::from_entries([("3.01.15.001", b"{}\0".to_vec())]);
        let err = fetch_style_record(&store, "3.01.15.00").unwrap_err();
        assert!(matches!(err, StyleError::NotFound { ref label } if label == "3.01.15.00"));
    }
}
