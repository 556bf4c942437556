//! Entity structs for all Gigboard records.
//!
//! Each entity lives in its own storage region (see `gig_db::stable`).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod client;
mod feedback;
mod job;
mod talent;

pub use client::Client;
pub use feedback::Feedback;
pub use job::{Bid, Job};
pub use talent::Talent;
