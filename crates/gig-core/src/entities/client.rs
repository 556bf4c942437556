use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::Principal;

/// A hiring account. At most one per identity, and never alongside a `Talent`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Client {
    pub id: Principal,
    pub name: String,
    pub completed_jobs: Vec<String>,
    pub total_spent: Option<u64>,
    #[serde(default)]
    pub feedbacks: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
