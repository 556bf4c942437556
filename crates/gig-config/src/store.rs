//! Record store configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Path used when the database runs without a backing file.
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    String::from(".gigboard/market.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// libSQL database file holding all four record regions, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl StoreConfig {
    /// Whether the store lives only for the lifetime of the process.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }

    /// Resolve `path` against `base` when it is relative.
    ///
    /// In-memory and absolute paths are returned unchanged.
    #[must_use]
    pub fn resolve(&self, base: &Path) -> PathBuf {
        let path = PathBuf::from(&self.path);
        if self.is_in_memory() || path.is_absolute() {
            path
        } else {
            base.join(path)
        }
    }
}
