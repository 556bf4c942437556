//! General application configuration.

use gig_core::identity::Principal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_format() -> String {
    String::from("json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Caller identity used when `--caller` is not given on the command line.
    #[serde(default)]
    pub caller: String,

    /// Default output format for CLI responses (`json` or `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            caller: String::new(),
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    /// The configured default caller, if one is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the value is set but is not a
    /// valid principal.
    pub fn caller(&self) -> Result<Option<Principal>, ConfigError> {
        if self.caller.is_empty() {
            return Ok(None);
        }
        Principal::new(&self.caller)
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: "general.caller".into(),
                reason: e.message().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.caller.is_empty());
        assert_eq!(config.default_format, "json");
        assert!(config.caller().unwrap().is_none());
    }

    #[test]
    fn blank_caller_is_invalid() {
        let config = GeneralConfig {
            caller: "   ".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.caller(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
