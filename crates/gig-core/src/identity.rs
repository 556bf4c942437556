use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::MarketError;

/// Opaque, externally authenticated identity of a caller.
///
/// Authentication happens outside this crate; a `Principal` is whatever the
/// surrounding environment vouches for. It doubles as the key of the talent
/// and client stores. Deserialization goes through [`Principal::new`], so a
/// decoded principal is never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Build a principal from raw text. Surrounding whitespace is stripped.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::BadRequest` if the text is blank.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, MarketError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MarketError::bad_request("principal must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Principal {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(|e| serde::de::Error::custom(e.message()))
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
