use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::JobStatus;
use crate::identity::Principal;

/// A talent's offer on a job.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Bid {
    pub talent_id: Principal,
    pub bid_text: String,
    pub bid_amount: u64,
}

/// A unit of work posted by a client. Amounts are in the smallest currency unit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub owner: Principal,
    pub budget: u64,
    /// Bids in arrival order.
    pub bids: Vec<Bid>,
    pub assigned_talent: Option<Principal>,
    pub status: JobStatus,
    pub client_rating: Option<u64>,
    pub client_feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// The bid placed by `talent`, if any.
    #[must_use]
    pub fn bid_from(&self, talent: &Principal) -> Option<&Bid> {
        self.bids.iter().find(|bid| &bid.talent_id == talent)
    }

    /// Amount owed on approval: the assigned talent's bid, or the budget when
    /// no matching bid exists.
    #[must_use]
    pub fn settlement_amount(&self) -> u64 {
        self.assigned_talent
            .as_ref()
            .and_then(|talent| self.bid_from(talent))
            .map_or(self.budget, |bid| bid.bid_amount)
    }
}
