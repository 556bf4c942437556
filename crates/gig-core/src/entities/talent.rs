use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::Principal;

/// A freelancer profile. At most one per identity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Talent {
    pub id: Principal,
    pub name: String,
    pub skills: Vec<String>,
    pub hourly_rate: Option<u64>,
    /// IDs of approved jobs.
    pub completed_jobs: Vec<String>,
    /// Sum of client ratings across `completed_jobs`. `None` until the first approval.
    pub total_rating: Option<u64>,
    pub total_earned: Option<u64>,
    /// Feedback IDs received. Non-owning; entries may dangle.
    pub feedbacks: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
