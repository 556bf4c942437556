//! Repository modules implementing every marketplace operation.
//!
//! Each module adds methods to `MarketService` via `impl MarketService` blocks.

pub mod client;
pub mod feedback;
pub mod job;
pub mod profile;
pub mod talent;

pub use job::JobFilter;
