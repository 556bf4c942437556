//! Service layer hosting every marketplace operation.
//!
//! `MarketService` wraps `MarketDb`. Operations are implemented as
//! `impl MarketService` blocks in `repos/`, one module per entity. Every
//! operation takes the caller identity explicitly and returns a
//! `MarketResult`; storage failures convert to `MarketError::InternalError`.

use gig_core::entities::{Client, Talent};
use gig_core::enums::UserRole;
use gig_core::errors::{MarketError, MarketResult};
use gig_core::identity::Principal;

use crate::MarketDb;
use crate::error::DatabaseError;

/// Orchestrates reads and mutations across the four record stores.
///
/// Mutation protocol for operations touching more than one store:
/// 1. Validate against current state
/// 2. Begin transaction
/// 3. Stage every store write on the transaction
/// 4. Commit
pub struct MarketService {
    db: MarketDb,
}

impl MarketService {
    /// Open a service over a local database (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = MarketDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `MarketDb`.
    #[must_use]
    pub const fn from_db(db: MarketDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MarketDb {
        &self.db
    }

    /// Role held by `caller`, if any. Talent wins if both somehow exist.
    pub(crate) async fn role_of(&self, caller: &Principal) -> MarketResult<Option<UserRole>> {
        let conn = self.db.conn();
        if self.db.talents().contains_key(conn, caller).await? {
            return Ok(Some(UserRole::Talent));
        }
        if self.db.clients().contains_key(conn, caller).await? {
            return Ok(Some(UserRole::Client));
        }
        Ok(None)
    }

    /// Load the caller's talent record or fail with `Unauthorized`.
    pub(crate) async fn require_talent(&self, caller: &Principal) -> MarketResult<Talent> {
        self.db
            .talents()
            .get(self.db.conn(), caller)
            .await?
            .ok_or_else(|| {
                MarketError::Unauthorized("Only talents can perform this action.".into())
            })
    }

    /// Load the caller's client record or fail with `Unauthorized`.
    pub(crate) async fn require_client(&self, caller: &Principal) -> MarketResult<Client> {
        self.db
            .clients()
            .get(self.db.conn(), caller)
            .await?
            .ok_or_else(|| {
                MarketError::Unauthorized("Only clients can perform this action.".into())
            })
    }
}
