//! In-memory style store.

use std::collections::BTreeMap;

use crate::StyleStore;

/// Style payloads held in memory, keyed by label.
#[derive(Debug, Clone, Default)]
pub struct MemoryStyleStore {
    items: BTreeMap<String, Vec<u8>>,
}

impl MemoryStyleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(label, payload)` pairs. The first payload wins
    /// when a label repeats.
    pub fn from_entries<I, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, Vec<u8>)>,
        L: Into<String>,
    {
        let mut store = Self::new();
        for (label, payload) in entries {
            store.insert(label, payload);
        }
        store
    }

    /// Insert a payload unless the label is already present.
    ///
    /// Returns `false` if the label was already taken.
    pub fn insert(&mut self, label: impl Into<String>, payload: Vec<u8>) -> bool {
        let label = label.into();
        if self.items.contains_key(&label) {
            return false;
        }
        self.items.insert(label, payload);
        true
    }
}

impl StyleStore for MemoryStyleStore {
    fn payload(&self, label: &str) -> Option<&[u8]> {
        self.items.get(label).map(Vec::as_slice)
    }

    fn labels(&self) -> Vec<&str> {
        self.items.keys().map(String::as_str).collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_payload_wins() {
        let mut store = MemoryStyleStore::new();
        assert!(store.insert("a", b"1".to_vec()));
        assert!(!store.insert("a", b"2".to_vec()));
        assert_eq!(store.payload("a"), Some(&b"1"[..]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn labels_are_sorted() {
        let store = MemoryStyleStore::from_entries([
            ("3.01.13.185", Vec::new()),
            ("3.01.02.011", Vec::new()),
        ]);
        assert_eq!(store.labels(), vec!["3.01.02.011", "3.01.13.185"]);
    }
}
