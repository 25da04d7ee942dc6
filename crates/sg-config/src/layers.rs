//! Layer directory settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayersConfig {
    /// Directory searched for layer documents given by name.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}
