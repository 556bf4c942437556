//! The closed error taxonomy returned by every marketplace operation.
//!
//! Storage-level failures (`DatabaseError`) and configuration failures
//! (`ConfigError`) live in their own crates. They converge here: anything a
//! caller can observe from an operation is one of these five kinds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure kinds surfaced by marketplace operations.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum MarketError {
    /// A referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller has no matching account, or acts outside their role.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller has the right role but may not touch this particular entity.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A precondition failed (duplicate registration, invalid field, wrong status).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything unexpected, carrying a diagnostic string.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl MarketError {
    /// Stable tag for this error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::BadRequest(_) => "bad_request",
            Self::InternalError(_) => "internal_error",
        }
    }

    /// Human-readable message attached to the error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::BadRequest(m)
            | Self::InternalError(m) => m,
        }
    }

    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{entity} {id} does not exist"))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

/// Result alias used by every marketplace operation.
pub type MarketResult<T> = Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_as_tagged_variant() {
        let err = MarketError::Unauthorized("Create an account first.".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "unauthorized", "message": "Create an account first."})
        );
        let back: MarketError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn kind_and_message() {
        let err = MarketError::not_found("job", "job-0000abcd");
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.message(), "job job-0000abcd does not exist");
        assert_eq!(err.to_string(), "Not found: job job-0000abcd does not exist");
    }
}
