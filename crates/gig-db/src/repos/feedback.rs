//! Feedback repository.

use gig_core::entities::Feedback;
use gig_core::enums::UserRole;
use gig_core::errors::{MarketError, MarketResult};
use gig_core::identity::Principal;
use gig_core::ids::PREFIX_FEEDBACK;
use gig_core::payloads::FeedbackPayload;
use gig_core::views::FeedbackInfo;

use crate::error::DatabaseError;
use crate::helpers::{now, require_text, touched};
use crate::service::MarketService;

impl MarketService {
    /// Leave feedback on another user's profile.
    ///
    /// The feedback record and the subject's `feedbacks` list are written in
    /// one transaction.
    ///
    /// # Errors
    ///
    /// `Unauthorized` if the caller has no account; `BadRequest` for blank
    /// text or feedback about oneself; `NotFound` if the subject has no profile.
    pub async fn add_feedback(
        &self,
        caller: &Principal,
        payload: FeedbackPayload,
    ) -> MarketResult<Feedback> {
        if self.role_of(caller).await?.is_none() {
            return Err(MarketError::Unauthorized("Create an account first.".into()));
        }
        let text = require_text("feedback", &payload.feedback)?;
        let subject = payload.subject;
        if &subject == caller {
            return Err(MarketError::bad_request("you cannot leave feedback on yourself"));
        }

        let subject_role = self
            .role_of(&subject)
            .await?
            .ok_or_else(|| MarketError::not_found("profile", &subject))?;

        let id = self
            .db()
            .generate_unused_id(self.db().feedback(), PREFIX_FEEDBACK)
            .await?;
        let now = now();
        let feedback = Feedback {
            id: id.clone(),
            feedback: text,
            owner: caller.clone(),
            subject: subject.clone(),
            created_at: now,
            updated_at: now,
        };

        let tx = self.db().begin().await?;
        self.db().feedback().insert_new(&tx, &id, &feedback).await?;
        match subject_role {
            UserRole::Talent => {
                let mut talent = self
                    .db()
                    .talents()
                    .get(&tx, &subject)
                    .await?
                    .ok_or_else(|| MarketError::not_found("talent", &subject))?;
                talent.feedbacks.push(id.clone());
                talent.updated_at = touched(talent.created_at);
                self.db().talents().insert(&tx, &subject, &talent).await?;
            }
            UserRole::Client => {
                let mut client = self
                    .db()
                    .clients()
                    .get(&tx, &subject)
                    .await?
                    .ok_or_else(|| MarketError::not_found("client", &subject))?;
                client.feedbacks.push(id.clone());
                client.updated_at = touched(client.created_at);
                self.db().clients().insert(&tx, &subject, &client).await?;
            }
        }
        tx.commit().await.map_err(DatabaseError::from)?;

        tracing::debug!(feedback = %id, owner = %caller, %subject, "feedback added");
        Ok(feedback)
    }

    /// Public view of a feedback record.
    ///
    /// # Errors
    ///
    /// `NotFound` if no feedback has this id.
    pub async fn get_feedback(&self, id: &str) -> MarketResult<FeedbackInfo> {
        let feedback = self
            .db()
            .feedback()
            .get(self.db().conn(), &id.to_string())
            .await?
            .ok_or_else(|| MarketError::not_found("feedback", id))?;
        Ok(FeedbackInfo::from(&feedback))
    }
}
