//! Style database settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the bundled style database.
pub const DEFAULT_STYLE_PATH: &str = "GSC_SymbolStandard_v2-3-14.stylx";

/// Symbol standard version the bundled style database belongs to.
pub const DEFAULT_STYLE_VERSION: &str = "2.3.14";

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_STYLE_PATH)
}

fn default_version() -> String {
    DEFAULT_STYLE_VERSION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StyleConfig {
    /// Path to the `.stylx` style database.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Symbol standard version the style database is expected to match.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            version: default_version(),
        }
    }
}

impl StyleConfig {
    /// Locate the style database.
    ///
    /// An absolute path, or a relative one present in the working directory,
    /// is returned as is. Otherwise the same relative path next to the running
    /// executable is tried. Falls back to the configured path unchanged.
    #[must_use]
    pub fn resolve_path(&self) -> PathBuf {
        self.resolve_path_from(std::env::current_exe().ok().as_deref())
    }

    fn resolve_path_from(&self, exe: Option<&Path>) -> PathBuf {
        if self.path.is_absolute() || self.path.is_file() {
            return self.path.clone();
        }
        exe.and_then(Path::parent)
            .map(|dir| dir.join(&self.path))
            .filter(|candidate| candidate.is_file())
            .unwrap_or_else(|| self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_point_at_bundled_style() {
        let config = StyleConfig::default();
        assert_eq!(config.path, PathBuf::from("GSC_SymbolStandard_v2-3-14.stylx"));
        assert_eq!(config.version, "2.3.14");
    }

    #[test]
    fn absolute_path_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.stylx");
        let config = StyleConfig {
            path: path.clone(),
            ..StyleConfig::default()
        };
        assert_eq!(config.resolve_path_from(None), path);
    }

    #[test]
    fn relative_path_found_next_to_executable() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bundled-test-style.stylx"), b"").unwrap();
        let exe = dir.path().join("sgsym");
        let config = StyleConfig {
            path: PathBuf::from("bundled-test-style.stylx"),
            ..StyleConfig::default()
        };
        assert_eq!(
            config.resolve_path_from(Some(&exe)),
            dir.path().join("bundled-test-style.stylx")
        );
    }

    #[test]
    fn unresolved_relative_path_is_returned_unchanged() {
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("sgsym");
        let config = StyleConfig {
            path: PathBuf::from("nowhere-test-style.stylx"),
            ..StyleConfig::default()
        };
        assert_eq!(
            config.resolve_path_from(Some(&exe)),
            PathBuf::from("nowhere-test-style.stylx")
        );
    }
}
