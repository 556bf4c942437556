use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::Principal;

/// Free-text feedback left by `owner` about `subject`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Feedback {
    pub id: String,
    pub feedback: String,
    pub owner: Principal,
    pub subject: Principal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
