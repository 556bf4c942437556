//! # gig-config
//!
//! Layered configuration loading for Gigboard using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GIGBOARD_*` prefix, `__` as separator)
//! 2. Project-level `.gigboard/config.toml`
//! 3. User-level `~/.config/gigboard/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GIGBOARD_STORE__PATH` -> `store.path`,
//! `GIGBOARD_GENERAL__CALLER` -> `general.caller`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gig_config::GigConfig;
//!
//! let config = GigConfig::load_with_dotenv().expect("config");
//! println!("store: {}", config.store.path);
//! ```

mod error;
mod general;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::{IN_MEMORY, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory holding project-local state and config.
pub const PROJECT_DIR: &str = ".gigboard";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GigConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GigConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading a `.env` file from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GIGBOARD_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gigboard").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = GigConfig::default();
        assert_eq!(config.store.path, ".gigboard/market.db");
        assert!(config.general.caller.is_empty());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: GigConfig = GigConfig::figment().extract()?;
            assert_eq!(config.general.default_format, "json");
            Ok(())
        });
    }
}
