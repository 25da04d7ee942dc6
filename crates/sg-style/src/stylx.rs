//! `.stylx` style databases.
//!
//! A `.stylx` file is a `SQLite` database whose `ITEMS` table holds one row per
//! style item, with the item label in `NAME` and the serialized definition in
//! `CONTENT`. The whole table is read once at open; the libSQL connection is
//! dropped before `open` returns.

use std::path::{Path, PathBuf};

use libsql::{Builder, Value};

use crate::StyleStore;
use crate::error::StyleError;
use crate::memory::MemoryStyleStore;

/// `CONTENT` is read as a blob: TEXT values end in a NUL sentinel, which a text
/// read would cut off.
const ITEMS_QUERY: &str = "SELECT NAME, CAST(CONTENT AS BLOB) FROM ITEMS";

/// A style database loaded into memory.
#[derive(Debug, Clone)]
pub struct StylxStore {
    path: PathBuf,
    items: MemoryStyleStore,
}

impl StylxStore {
    /// Open a `.stylx` file and load its `ITEMS` table.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::MissingFile` if the path does not exist (libSQL
    /// would otherwise create an empty database there), or `StyleError::LibSql`
    /// if the file is not a style database.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(StyleError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let mut rows = conn.query(ITEMS_QUERY, ()).await?;
        let mut items = MemoryStyleStore::new();
        let mut skipped = 0usize;

        while let Some(row) = rows.next().await? {
            let name = match row.get_value(0)? {
                Value::Text(name) => name,
                Value::Null => {
                    skipped += 1;
                    continue;
                }
                other => {
                    return Err(StyleError::Decode(format!(
                        "ITEMS.NAME is not text: {other:?}"
                    )));
                }
            };
            let payload = match row.get_value(1)? {
                Value::Text(text) => text.into_bytes(),
                Value::Blob(bytes) => bytes,
                Value::Null => Vec::new(),
                other => {
                    return Err(StyleError::Decode(format!(
                        "ITEMS.CONTENT for '{name}' is not text: {other:?}"
                    )));
                }
            };
            if !items.insert(name.clone(), payload) {
                tracing::warn!(label = %name, "duplicate style item; keeping the first");
            }
        }

        tracing::info!(
            path = %path.display(),
            items = items.len(),
            skipped,
            "style database loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            items,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StyleStore for StylxStore {
    fn payload(&self, label: &str) -> Option<&[u8]> {
        self.items.payload(label)
    }

    fn labels(&self) -> Vec<&str> {
        self.items.labels()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
