//! # gig-db
//!
//! libSQL-backed record stores and marketplace operations for Gigboard.
//!
//! Four stores (talents, jobs, clients, feedback) live in distinct regions of
//! one `stable_entries` table. `MarketService` implements every marketplace
//! operation on top of them; multi-store mutations run in one transaction.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod stable;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use gig_core::entities::{Client, Feedback, Job, Talent};
use gig_core::enums::EntityType;
use gig_core::identity::Principal;
use libsql::Builder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use stable::{MemoryRegion, StableMap};

/// Draws before `generate_unused_id` gives up on finding a free key.
const MAX_ID_ATTEMPTS: usize = 8;

/// Central database handle for all Gigboard state.
///
/// Wraps a libSQL database and connection, and owns the typed handle of each
/// record store.
pub struct MarketDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    talents: StableMap<Principal, Talent>,
    jobs: StableMap<String, Job>,
    clients: StableMap<Principal, Client>,
    feedback: StableMap<String, Feedback>,
}

impl MarketDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let market_db = Self {
            db,
            conn,
            talents: StableMap::new(MemoryRegion::for_entity(EntityType::Talent)),
            jobs: StableMap::new(MemoryRegion::for_entity(EntityType::Job)),
            clients: StableMap::new(MemoryRegion::for_entity(EntityType::Client)),
            feedback: StableMap::new(MemoryRegion::for_entity(EntityType::Feedback)),
        };
        market_db.run_migrations().await?;
        tracing::debug!(path, "opened market database");
        Ok(market_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Start a transaction. Dropping it without `commit()` rolls back.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction cannot be started.
    pub async fn begin(&self) -> Result<libsql::Transaction, DatabaseError> {
        Ok(self.conn.transaction().await?)
    }

    #[must_use]
    pub const fn talents(&self) -> &StableMap<Principal, Talent> {
        &self.talents
    }

    #[must_use]
    pub const fn jobs(&self) -> &StableMap<String, Job> {
        &self.jobs
    }

    #[must_use]
    pub const fn clients(&self) -> &StableMap<Principal, Client> {
        &self.clients
    }

    #[must_use]
    pub const fn feedback(&self) -> &StableMap<String, Feedback> {
        &self.feedback
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"job-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Generate a prefixed ID that is not yet a key of `map`.
    ///
    /// Redraws on collision, up to `MAX_ID_ATTEMPTS` times.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if every draw was taken, or any
    /// error from the underlying queries.
    pub async fn generate_unused_id<V>(
        &self,
        map: &StableMap<String, V>,
        prefix: &str,
    ) -> Result<String, DatabaseError>
    where
        V: Serialize + DeserializeOwned,
    {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.generate_id(prefix).await?;
            if !map.contains_key(&self.conn, &id).await? {
                return Ok(id);
            }
            tracing::warn!(region = %map.region(), %id, "generated id already taken, redrawing");
        }
        Err(DatabaseError::InvalidState(format!(
            "no unused {prefix} id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> MarketDb {
        MarketDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_region_table() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["stable_entries"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        for prefix in gig_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(gig_core::ids::has_prefix(&id, prefix), "bad id: {id}");
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn generate_unused_id_skips_existing_keys() {
        let db = test_db().await;
        let now = chrono::Utc::now();
        for _ in 0..20 {
            let id = db.generate_unused_id(db.feedback(), "fbk").await.unwrap();
            assert!(gig_core::ids::has_prefix(&id, "fbk"), "bad id: {id}");
            let record = Feedback {
                id: id.clone(),
                feedback: "ok".into(),
                owner: Principal::new("a").unwrap(),
                subject: Principal::new("b").unwrap(),
                created_at: now,
                updated_at: now,
            };
            db.feedback().insert_new(db.conn(), &id, &record).await.unwrap();
        }
        assert_eq!(db.feedback().len(db.conn()).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn dropped_transaction_rolls_back() {
        let db = test_db().await;
        let key = "job-00000001".to_string();
        {
            let tx = db.begin().await.unwrap();
            db.feedback()
                .insert(
                    &tx,
                    &key,
                    &Feedback {
                        id: key.clone(),
                        feedback: "staged".into(),
                        owner: Principal::new("a").unwrap(),
                        subject: Principal::new("b").unwrap(),
                        created_at: chrono::Utc::now(),
                        updated_at: chrono::Utc::now(),
                    },
                )
                .await
                .unwrap();
        }
        assert!(!db.feedback().contains_key(db.conn(), &key).await.unwrap());
    }

    #[tokio::test]
    async fn file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.db");
        let path = path.to_str().unwrap();
        let key = Principal::new("ryjl3-tyaaa").unwrap();
        let now = chrono::Utc::now();
        let client = Client {
            id: key.clone(),
            name: "Acme".into(),
            completed_jobs: vec![],
            total_spent: None,
            feedbacks: vec![],
            created_at: now,
            updated_at: now,
        };

        {
            let db = MarketDb::open_local(path).await.unwrap();
            db.clients().insert(db.conn(), &key, &client).await.unwrap();
        }

        let db = MarketDb::open_local(path).await.unwrap();
        assert_eq!(db.clients().get(db.conn(), &key).await.unwrap(), Some(client));
    }
}
