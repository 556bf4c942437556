//! Database error types for gig-db.

use gig_core::errors::MarketError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A stored value could not be encoded or decoded.
    #[error("Codec error in region {region}: {source}")]
    Codec {
        region: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Storage failures are never the caller's fault; they surface as
/// `InternalError` with the diagnostic text.
impl From<DatabaseError> for MarketError {
    fn from(error: DatabaseError) -> Self {
        tracing::error!(%error, "storage failure");
        Self::InternalError(error.to_string())
    }
}
