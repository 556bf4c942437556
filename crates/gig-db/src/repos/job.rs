//! Job repository: posting, bidding, and the four-step job lifecycle.

use gig_core::entities::{Bid, Feedback, Job};
use gig_core::enums::JobStatus;
use gig_core::errors::{MarketError, MarketResult};
use gig_core::identity::Principal;
use gig_core::ids::{PREFIX_FEEDBACK, PREFIX_JOB};
use gig_core::payloads::{ApprovePayload, BidPayload, JobPayload, MAX_RATING, MIN_RATING};
use gig_core::views::JobInfo;

use crate::error::DatabaseError;
use crate::helpers::{add_to_total, now, require_text, touched};
use crate::service::MarketService;

/// Optional filters for `list_jobs`. Empty filter lists every job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub owner: Option<Principal>,
}

impl JobFilter {
    fn matches(&self, job: &Job) -> bool {
        self.status.is_none_or(|status| job.status == status)
            && self.owner.as_ref().is_none_or(|owner| &job.owner == owner)
    }
}

/// Move `job` to `next`, stamping `updated_at`.
fn advance(job: &mut Job, next: JobStatus) -> MarketResult<()> {
    if !job.status.can_transition_to(next) {
        tracing::warn!(job = %job.id, from = %job.status, to = %next, "rejected job transition");
        return Err(MarketError::bad_request(format!(
            "job {} is {}, cannot move to {next}",
            job.id, job.status
        )));
    }
    job.status = next;
    job.updated_at = touched(job.created_at);
    Ok(())
}

fn require_owner(job: &Job, caller: &Principal) -> MarketResult<()> {
    if &job.owner != caller {
        tracing::warn!(job = %job.id, %caller, "caller does not own job");
        return Err(MarketError::Forbidden(format!(
            "job {} belongs to another client",
            job.id
        )));
    }
    Ok(())
}

impl MarketService {
    /// Post a new job as the calling client. Starts `pending` with no bids.
    ///
    /// # Errors
    ///
    /// `Unauthorized` if the caller is not a client; `BadRequest` for a blank
    /// title, a zero budget, or an explicit id that is already taken.
    pub async fn add_job(&self, caller: &Principal, payload: JobPayload) -> MarketResult<Job> {
        self.require_client(caller).await?;
        let title = require_text("title", &payload.title)?;
        if payload.budget == 0 {
            return Err(MarketError::bad_request("budget must be greater than zero"));
        }

        let conn = self.db().conn();
        let id = match payload.id {
            Some(ref raw) => {
                let id = require_text("id", raw)?;
                if self.db().jobs().contains_key(conn, &id).await? {
                    return Err(MarketError::bad_request(format!("job {id} already exists")));
                }
                id
            }
            None => {
                self.db()
                    .generate_unused_id(self.db().jobs(), PREFIX_JOB)
                    .await?
            }
        };

        let now = now();
        let job = Job {
            id: id.clone(),
            title,
            description: payload.description.trim().to_string(),
            owner: caller.clone(),
            budget: payload.budget,
            bids: Vec::new(),
            assigned_talent: None,
            status: JobStatus::Pending,
            client_rating: None,
            client_feedback: None,
            created_at: now,
            updated_at: now,
        };
        self.db().jobs().insert_new(conn, &id, &job).await?;
        tracing::debug!(job = %id, owner = %caller, budget = job.budget, "job posted");
        Ok(job)
    }

    /// Fetch a job record.
    ///
    /// # Errors
    ///
    /// `NotFound` if no job has this id.
    pub async fn get_job_record(&self, id: &str) -> MarketResult<Job> {
        self.db()
            .jobs()
            .get(self.db().conn(), &id.to_string())
            .await?
            .ok_or_else(|| MarketError::not_found("job", id))
    }

    /// Public view of a job.
    ///
    /// # Errors
    ///
    /// `NotFound` if no job has this id.
    pub async fn get_job(&self, id: &str) -> MarketResult<JobInfo> {
        let job = self.get_job_record(id).await?;
        Ok(JobInfo::from(&job))
    }

    /// Jobs in ascending id order, narrowed by `filter`.
    ///
    /// # Errors
    ///
    /// `InternalError` on storage failure.
    pub async fn list_jobs(&self, filter: &JobFilter) -> MarketResult<Vec<JobInfo>> {
        let entries = self.db().jobs().entries(self.db().conn()).await?;
        Ok(entries
            .iter()
            .map(|(_, job)| job)
            .filter(|job| filter.matches(job))
            .map(JobInfo::from)
            .collect())
    }

    /// Place a bid on a pending job as the calling talent.
    ///
    /// # Errors
    ///
    /// `Unauthorized` if the caller is not a talent; `NotFound` for an unknown
    /// job; `BadRequest` if the job is not pending, the amount is zero, the
    /// pitch is blank, or the talent already bid.
    pub async fn bid_on_job(
        &self,
        caller: &Principal,
        job_id: &str,
        payload: BidPayload,
    ) -> MarketResult<Job> {
        self.require_talent(caller).await?;
        let mut job = self.get_job_record(job_id).await?;

        if job.status != JobStatus::Pending {
            return Err(MarketError::bad_request(format!(
                "job {job_id} is {}, bids are closed",
                job.status
            )));
        }
        let bid_text = require_text("bid_text", &payload.bid_text)?;
        if payload.bid_amount == 0 {
            return Err(MarketError::bad_request("bid_amount must be greater than zero"));
        }
        if job.bid_from(caller).is_some() {
            return Err(MarketError::bad_request(format!(
                "you already bid on job {job_id}"
            )));
        }

        job.bids.push(Bid {
            talent_id: caller.clone(),
            bid_text,
            bid_amount: payload.bid_amount,
        });
        job.updated_at = touched(job.created_at);
        self.db()
            .jobs()
            .insert(self.db().conn(), &job.id, &job)
            .await?;
        tracing::debug!(job = %job.id, talent = %caller, amount = payload.bid_amount, "bid placed");
        Ok(job)
    }

    /// Assign a bidding talent to the caller's pending job.
    ///
    /// # Errors
    ///
    /// `Unauthorized` if the caller is not a client; `NotFound` for an unknown
    /// job or talent; `Forbidden` if the caller does not own the job;
    /// `BadRequest` if the job is not pending or the talent never bid.
    pub async fn assign_talent(
        &self,
        caller: &Principal,
        job_id: &str,
        talent_id: &Principal,
    ) -> MarketResult<Job> {
        self.require_client(caller).await?;
        let mut job = self.get_job_record(job_id).await?;
        require_owner(&job, caller)?;
        self.get_talent(talent_id).await?;

        if job.bid_from(talent_id).is_none() {
            return Err(MarketError::bad_request(format!(
                "talent {talent_id} has not bid on job {job_id}"
            )));
        }
        advance(&mut job, JobStatus::InProgress)?;
        job.assigned_talent = Some(talent_id.clone());

        self.db()
            .jobs()
            .insert(self.db().conn(), &job.id, &job)
            .await?;
        tracing::debug!(job = %job.id, talent = %talent_id, "talent assigned");
        Ok(job)
    }

    /// Mark the caller's assigned job as delivered.
    ///
    /// # Errors
    ///
    /// `Unauthorized` if the caller is not a talent; `NotFound` for an unknown
    /// job; `Forbidden` if the caller is not the assigned talent; `BadRequest`
    /// if the job is not in progress.
    pub async fn complete_job(&self, caller: &Principal, job_id: &str) -> MarketResult<Job> {
        self.require_talent(caller).await?;
        let mut job = self.get_job_record(job_id).await?;

        if job.assigned_talent.as_ref() != Some(caller) {
            tracing::warn!(job = %job.id, %caller, "caller is not the assigned talent");
            return Err(MarketError::Forbidden(format!(
                "job {job_id} is not assigned to you"
            )));
        }
        advance(&mut job, JobStatus::Completed)?;

        self.db()
            .jobs()
            .insert(self.db().conn(), &job.id, &job)
            .await?;
        tracing::debug!(job = %job.id, talent = %caller, "job completed");
        Ok(job)
    }

    /// Approve delivered work, rate the talent, and settle totals.
    ///
    /// Job, talent, client, and the optional feedback record are written in
    /// one transaction.
    ///
    /// # Errors
    ///
    /// `Unauthorized` if the caller is not a client; `NotFound` for an unknown
    /// job or a missing assigned talent; `Forbidden` if the caller does not own
    /// the job; `BadRequest` if the job is not completed, the rating is out of
    /// range, the feedback is blank, or a total would overflow.
    pub async fn approve_job(
        &self,
        caller: &Principal,
        job_id: &str,
        payload: ApprovePayload,
    ) -> MarketResult<Job> {
        let mut client = self.require_client(caller).await?;
        let mut job = self.get_job_record(job_id).await?;
        require_owner(&job, caller)?;

        if !(MIN_RATING..=MAX_RATING).contains(&payload.rating) {
            return Err(MarketError::bad_request(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        let feedback_text = payload
            .feedback
            .as_deref()
            .map(|text| require_text("feedback", text))
            .transpose()?;

        let talent_id = job
            .assigned_talent
            .clone()
            .ok_or_else(|| {
                MarketError::bad_request(format!("job {job_id} has no assigned talent"))
            })?;
        advance(&mut job, JobStatus::Approved)?;
        let mut talent = self.get_talent(&talent_id).await?;

        let amount = job.settlement_amount();
        talent.total_rating = Some(add_to_total(
            talent.total_rating,
            payload.rating,
            "total_rating",
        )?);
        talent.total_earned = Some(add_to_total(talent.total_earned, amount, "total_earned")?);
        client.total_spent = Some(add_to_total(client.total_spent, amount, "total_spent")?);

        let feedback = match feedback_text {
            Some(text) => {
                let id = self
                    .db()
                    .generate_unused_id(self.db().feedback(), PREFIX_FEEDBACK)
                    .await?;
                let now = now();
                Some(Feedback {
                    id,
                    feedback: text,
                    owner: caller.clone(),
                    subject: talent_id.clone(),
                    created_at: now,
                    updated_at: now,
                })
            }
            None => None,
        };

        job.client_rating = Some(payload.rating);
        job.client_feedback = feedback.as_ref().map(|f| f.id.clone());
        talent.completed_jobs.push(job.id.clone());
        client.completed_jobs.push(job.id.clone());
        if let Some(ref feedback) = feedback {
            talent.feedbacks.push(feedback.id.clone());
        }
        talent.updated_at = touched(talent.created_at);
        client.updated_at = touched(client.created_at);

        let tx = self.db().begin().await?;
        self.db().jobs().insert(&tx, &job.id, &job).await?;
        self.db().talents().insert(&tx, &talent.id, &talent).await?;
        self.db().clients().insert(&tx, &client.id, &client).await?;
        if let Some(ref feedback) = feedback {
            self.db()
                .feedback()
                .insert_new(&tx, &feedback.id, feedback)
                .await?;
        }
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::debug!(
            job = %job.id,
            talent = %talent_id,
            rating = payload.rating,
            amount,
            "job approved"
        );
        Ok(job)
    }
}
