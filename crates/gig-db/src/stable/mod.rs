//! Persistent ordered key-value maps partitioned into regions.
//!
//! Every store is a `StableMap` over the shared `stable_entries` table. The
//! region id keeps stores apart, so one database file holds all of them.

mod map;
mod region;

pub use map::{StableMap, StorableKey};
pub use region::MemoryRegion;
