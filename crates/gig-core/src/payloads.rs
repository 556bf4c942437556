//! Request payloads accepted by marketplace operations.
//!
//! The caller identity is never part of a payload; it is passed to each
//! operation separately.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::Principal;

/// Input to `add_talent`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TalentPayload {
    pub name: String,
    #[serde(default)]
    pub hourly_rate: Option<u64>,
}

/// Input to `add_client`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClientPayload {
    pub name: String,
}

/// Input to `add_job`. `id` is generated when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JobPayload {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub budget: u64,
}

/// Input to `bid_on_job`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BidPayload {
    pub bid_text: String,
    pub bid_amount: u64,
}

/// Input to `approve_job`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApprovePayload {
    /// Client rating for the delivered work, 1 through 5.
    pub rating: u64,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Input to `add_feedback`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedbackPayload {
    pub subject: Principal,
    pub feedback: String,
}

/// Lowest accepted client rating.
pub const MIN_RATING: u64 = 1;
/// Highest accepted client rating.
pub const MAX_RATING: u64 = 5;
