//! Loading and committing layer documents.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::document::LayerDocument;
use crate::error::LayerError;

/// Where layer documents come from and go back to.
pub trait LayerStore {
    /// Load the layer called `name`.
    ///
    /// # Errors
    ///
    /// Returns `LayerError` if the layer cannot be found or parsed.
    fn load(&self, name: &str) -> Result<LayerDocument, LayerError>;

    /// Replace the stored layer called `name` with `document`.
    ///
    /// # Errors
    ///
    /// Returns `LayerError` if the layer cannot be written.
    fn commit(&self, name: &str, document: &LayerDocument) -> Result<PathBuf, LayerError>;
}

/// Layer documents stored as JSON files in a directory.
#[derive(Debug, Clone)]
pub struct FileLayerStore {
    directory: PathBuf,
}

impl FileLayerStore {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Resolve a layer name to a file.
    ///
    /// Tried in order: `name` as a path, `<directory>/<name>.json`,
    /// `<directory>/<name>`.
    ///
    /// # Errors
    ///
    /// Returns `LayerError::NotFound` if none of the candidates is a file.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, LayerError> {
        let candidates = [
            PathBuf::from(name),
            self.directory.join(format!("{name}.json")),
            self.directory.join(name),
        ];
        candidates
            .into_iter()
            .find(|path| path.is_file())
            .ok_or_else(|| LayerError::NotFound {
                name: name.to_string(),
                looked_in: self.directory.clone(),
            })
    }
}

impl LayerStore for FileLayerStore {
    fn load(&self, name: &str) -> Result<LayerDocument, LayerError> {
        let path = self.resolve(name)?;
        let text = fs::read_to_string(&path).map_err(|source| LayerError::Io {
            path: path.clone(),
            source,
        })?;
        let document: LayerDocument =
            serde_json::from_str(&text).map_err(|source| LayerError::Json {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            features = document.features.len(),
            "layer loaded"
        );
        Ok(document)
    }

    /// Writes to a temp file beside the target and renames it into place, so
    /// the stored layer is either the old document or the new one.
    fn commit(&self, name: &str, document: &LayerDocument) -> Result<PathBuf, LayerError> {
        let path = self.resolve(name)?;
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let io_err = |source| LayerError::Io {
            path: path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
        serde_json::to_writer_pretty(&mut tmp, document).map_err(|source| LayerError::Json {
            path: path.clone(),
            source,
        })?;
        tmp.write_all(b"\n").map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;

        tmp.persist(&path).map_err(|e| LayerError::Persist {
            path: path.clone(),
            source: e.error,
        })?;

        tracing::info!(path = %path.display(), "layer committed");
        Ok(path)
    }
}
