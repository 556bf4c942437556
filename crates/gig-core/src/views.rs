//! Read-only projections of stored records.
//!
//! Views drop bookkeeping fields (timestamps) and compute presentation
//! fields such as `avg_rating` on demand. Nothing here is persisted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Bid, Client, Feedback, Job, Talent};
use crate::enums::{JobStatus, UserRole};
use crate::identity::Principal;

/// Ceiling average of `total_rating` over `completed_jobs`.
///
/// Returns 0 when there are no completed jobs or no rating yet.
#[must_use]
pub fn average_rating(total_rating: Option<u64>, completed_jobs: usize) -> u64 {
    let Ok(count) = u64::try_from(completed_jobs) else {
        return 0;
    };
    match (total_rating, count) {
        (Some(total), count) if count > 0 => total.div_ceil(count),
        _ => 0,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TalentInfo {
    pub id: Principal,
    pub name: String,
    pub skills: Vec<String>,
    pub hourly_rate: Option<u64>,
    pub completed_jobs: Vec<String>,
    pub avg_rating: u64,
    pub total_earned: Option<u64>,
    pub feedbacks: Vec<String>,
}

impl From<&Talent> for TalentInfo {
    fn from(talent: &Talent) -> Self {
        Self {
            id: talent.id.clone(),
            name: talent.name.clone(),
            skills: talent.skills.clone(),
            hourly_rate: talent.hourly_rate,
            completed_jobs: talent.completed_jobs.clone(),
            avg_rating: average_rating(talent.total_rating, talent.completed_jobs.len()),
            total_earned: talent.total_earned,
            feedbacks: talent.feedbacks.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClientInfo {
    pub id: Principal,
    pub name: String,
    pub completed_jobs: Vec<String>,
    pub total_spent: Option<u64>,
    pub feedbacks: Vec<String>,
}

impl From<&Client> for ClientInfo {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.clone(),
            name: client.name.clone(),
            completed_jobs: client.completed_jobs.clone(),
            total_spent: client.total_spent,
            feedbacks: client.feedbacks.clone(),
        }
    }
}

/// Profile of whichever role the caller holds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ProfileInfo {
    Talent(TalentInfo),
    Client(ClientInfo),
}

impl ProfileInfo {
    #[must_use]
    pub const fn role(&self) -> UserRole {
        match self {
            Self::Talent(_) => UserRole::Talent,
            Self::Client(_) => UserRole::Client,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &Principal {
        match self {
            Self::Talent(info) => &info.id,
            Self::Client(info) => &info.id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JobInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub owner: Principal,
    pub budget: u64,
    pub bids: Vec<Bid>,
    pub assigned_talent: Option<Principal>,
    pub status: JobStatus,
    pub client_rating: Option<u64>,
    pub client_feedback: Option<String>,
}

impl From<&Job> for JobInfo {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            description: job.description.clone(),
            owner: job.owner.clone(),
            budget: job.budget,
            bids: job.bids.clone(),
            assigned_talent: job.assigned_talent.clone(),
            status: job.status,
            client_rating: job.client_rating,
            client_feedback: job.client_feedback.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedbackInfo {
    pub id: String,
    pub feedback: String,
    pub owner: Principal,
    pub subject: Principal,
}

impl From<&Feedback> for FeedbackInfo {
    fn from(feedback: &Feedback) -> Self {
        Self {
            id: feedback.id.clone(),
            feedback: feedback.feedback.clone(),
            owner: feedback.owner.clone(),
            subject: feedback.subject.clone(),
        }
    }
}
