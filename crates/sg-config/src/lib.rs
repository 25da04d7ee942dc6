//! # sg-config
//!
//! Layered configuration loading for `sgsym` using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SGSYM_*` prefix, `__` as separator)
//! 2. Project-level `./sgsym.toml`
//! 3. User-level `~/.config/sgsym/config.toml`
//! 4. Built-in defaults
//!
//! `SGSYM_STYLE__PATH` maps to `style.path`, `SGSYM_GENERAL__CODE_FIELD` to
//! `general.code_field`.
//!
//! # Usage
//!
//! ```no_run
//! use sg_config::SgConfig;
//!
//! let config = SgConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("style database: {}", config.style.resolve_path().display());
//! ```

mod error;
mod general;
mod layers;
mod style;

pub use error::ConfigError;
pub use general::{DEFAULT_CODE_FIELD, GeneralConfig};
pub use layers::LayersConfig;
pub use style::{DEFAULT_STYLE_PATH, DEFAULT_STYLE_VERSION, StyleConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "sgsym.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SgConfig {
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub layers: LayersConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SgConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and callers can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SGSYM_").split("__"))
    }

    /// Reject values the rebuilder cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty code field or an empty
    /// style path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.code_field.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.code_field".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.style.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "style.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sgsym").join("config.toml"))
    }
}
