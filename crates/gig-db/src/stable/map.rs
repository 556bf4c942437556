//! Typed map over one region of `stable_entries`.

use std::marker::PhantomData;

use gig_core::identity::Principal;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::region::MemoryRegion;
use crate::error::DatabaseError;

/// A key that can be stored as TEXT.
///
/// Iteration order follows the byte order of `to_key()`.
pub trait StorableKey: Sized {
    fn to_key(&self) -> String;

    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the stored text is not a valid key.
    fn from_key(raw: &str) -> Result<Self, DatabaseError>;
}

impl StorableKey for String {
    fn to_key(&self) -> String {
        self.clone()
    }

    fn from_key(raw: &str) -> Result<Self, DatabaseError> {
        Ok(raw.to_string())
    }
}

impl StorableKey for Principal {
    fn to_key(&self) -> String {
        self.as_str().to_string()
    }

    fn from_key(raw: &str) -> Result<Self, DatabaseError> {
        Self::new(raw).map_err(|e| {
            DatabaseError::InvalidState(format!("stored principal key '{raw}': {e}"))
        })
    }
}

/// Persistent ordered map from `K` to JSON-encoded `V` within one region.
///
/// The map holds no connection; every call takes one, so callers can pass a
/// plain connection or an open transaction (which derefs to one).
pub struct StableMap<K, V> {
    region: MemoryRegion,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> StableMap<K, V>
where
    K: StorableKey,
    V: Serialize + DeserializeOwned,
{
    #[must_use]
    pub const fn new(region: MemoryRegion) -> Self {
        Self {
            region,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn region(&self) -> MemoryRegion {
        self.region
    }

    fn region_param(&self) -> i64 {
        i64::from(self.region.id())
    }

    fn encode(&self, value: &V) -> Result<String, DatabaseError> {
        serde_json::to_string(value).map_err(|source| DatabaseError::Codec {
            region: self.region.name(),
            source,
        })
    }

    fn decode(&self, raw: &str) -> Result<V, DatabaseError> {
        serde_json::from_str(raw).map_err(|source| DatabaseError::Codec {
            region: self.region.name(),
            source,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the stored value cannot be decoded.
    pub async fn get(
        &self,
        conn: &libsql::Connection,
        key: &K,
    ) -> Result<Option<V>, DatabaseError> {
        let mut rows = conn
            .query(
                "SELECT value FROM stable_entries WHERE region = ?1 AND key = ?2",
                libsql::params![self.region_param(), key.to_key()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(self.decode(&row.get::<String>(0)?)?)),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn contains_key(
        &self,
        conn: &libsql::Connection,
        key: &K,
    ) -> Result<bool, DatabaseError> {
        let mut rows = conn
            .query(
                "SELECT 1 FROM stable_entries WHERE region = ?1 AND key = ?2 LIMIT 1",
                libsql::params![self.region_param(), key.to_key()],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Insert or replace the value under `key`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if encoding or the write fails.
    pub async fn insert(
        &self,
        conn: &libsql::Connection,
        key: &K,
        value: &V,
    ) -> Result<Option<V>, DatabaseError> {
        let previous = self.get(conn, key).await?;
        conn.execute(
            "INSERT INTO stable_entries (region, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT (region, key) DO UPDATE SET value = excluded.value",
            libsql::params![self.region_param(), key.to_key(), self.encode(value)?],
        )
        .await?;
        Ok(previous)
    }

    /// Insert `value` under a key that must not exist yet.
    ///
    /// Never overwrites: an occupied key fails and leaves the stored value as is.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` if the key is taken or the write fails.
    pub async fn insert_new(
        &self,
        conn: &libsql::Connection,
        key: &K,
        value: &V,
    ) -> Result<(), DatabaseError> {
        let raw_key = key.to_key();
        conn.execute(
            "INSERT INTO stable_entries (region, key, value) VALUES (?1, ?2, ?3)",
            libsql::params![self.region_param(), raw_key.clone(), self.encode(value)?],
        )
        .await
        .map_err(|e| {
            DatabaseError::Query(format!("insert {raw_key} into {}: {e}", self.region()))
        })?;
        Ok(())
    }

    /// Remove `key`, returning the value it held.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn remove(
        &self,
        conn: &libsql::Connection,
        key: &K,
    ) -> Result<Option<V>, DatabaseError> {
        let previous = self.get(conn, key).await?;
        if previous.is_some() {
            conn.execute(
                "DELETE FROM stable_entries WHERE region = ?1 AND key = ?2",
                libsql::params![self.region_param(), key.to_key()],
            )
            .await?;
        }
        Ok(previous)
    }

    /// Number of entries in this region.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn len(&self, conn: &libsql::Connection) -> Result<u64, DatabaseError> {
        let mut rows = conn
            .query(
                "SELECT COUNT(*) FROM stable_entries WHERE region = ?1",
                [self.region_param()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("negative row count {count}")))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn is_empty(&self, conn: &libsql::Connection) -> Result<bool, DatabaseError> {
        Ok(self.len(conn).await? == 0)
    }

    /// All entries in ascending key order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or any entry cannot be decoded.
    pub async fn entries(&self, conn: &libsql::Connection) -> Result<Vec<(K, V)>, DatabaseError> {
        let mut rows = conn
            .query(
                "SELECT key, value FROM stable_entries WHERE region = ?1 ORDER BY key ASC",
                [self.region_param()],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            let key = K::from_key(&row.get::<String>(0)?)?;
            let value = self.decode(&row.get::<String>(1)?)?;
            entries.push((key, value));
        }
        Ok(entries)
    }
}
