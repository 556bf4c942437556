//! Talent repository: registration, profile edits, lookup.

use gig_core::entities::Talent;
use gig_core::errors::{MarketError, MarketResult};
use gig_core::identity::Principal;
use gig_core::payloads::TalentPayload;

use crate::helpers::{normalize_skills, now, require_text, touched};
use crate::service::MarketService;
use crate::updates::talent::TalentUpdate;

impl MarketService {
    /// Register the caller as a talent.
    ///
    /// Not idempotent: a second call for the same caller fails and leaves the
    /// store untouched.
    ///
    /// # Errors
    ///
    /// `BadRequest` for a blank name, an existing talent account, or an
    /// existing client account.
    pub async fn add_talent(
        &self,
        caller: &Principal,
        payload: TalentPayload,
    ) -> MarketResult<Talent> {
        let name = require_text("name", &payload.name)?;
        let conn = self.db().conn();

        if self.db().talents().contains_key(conn, caller).await? {
            return Err(MarketError::bad_request("You already have a talent account"));
        }
        if self.db().clients().contains_key(conn, caller).await? {
            return Err(MarketError::bad_request(
                "You already have a client account; one identity holds one role",
            ));
        }

        let now = now();
        let talent = Talent {
            id: caller.clone(),
            name,
            skills: Vec::new(),
            hourly_rate: payload.hourly_rate,
            completed_jobs: Vec::new(),
            total_rating: None,
            total_earned: None,
            feedbacks: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.db().talents().insert(conn, caller, &talent).await?;
        tracing::debug!(%caller, "talent registered");

        self.get_talent(caller).await
    }

    /// Fetch a talent record.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` has no talent record.
    pub async fn get_talent(&self, id: &Principal) -> MarketResult<Talent> {
        self.db()
            .talents()
            .get(self.db().conn(), id)
            .await?
            .ok_or_else(|| MarketError::not_found("talent", id))
    }

    /// Apply a partial update to the caller's talent profile.
    ///
    /// An empty update returns the current record unchanged.
    ///
    /// # Errors
    ///
    /// `Unauthorized` if the caller is not a talent; `BadRequest` for a blank name.
    pub async fn update_talent(
        &self,
        caller: &Principal,
        update: TalentUpdate,
    ) -> MarketResult<Talent> {
        let current = self.require_talent(caller).await?;
        if update.is_empty() {
            return Ok(current);
        }

        let mut updated = current;
        if let Some(ref name) = update.name {
            updated.name = require_text("name", name)?;
        }
        if let Some(ref skills) = update.skills {
            updated.skills = normalize_skills(skills);
        }
        if let Some(hourly_rate) = update.hourly_rate {
            updated.hourly_rate = hourly_rate;
        }
        updated.updated_at = touched(updated.created_at);

        self.db()
            .talents()
            .insert(self.db().conn(), caller, &updated)
            .await?;
        tracing::debug!(%caller, "talent profile updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{principal, register_client, test_service};
    use crate::updates::talent::TalentUpdateBuilder;
    use pretty_assertions::assert_eq;

    fn payload(name: &str, rate: Option<u64>) -> TalentPayload {
        TalentPayload {
            name: name.into(),
            hourly_rate: rate,
        }
    }

    #[tokio::test]
    async fn add_talent_stores_defaults() {
        let svc = test_service().await;
        let caller = principal("talent-1");

        let talent = svc.add_talent(&caller, payload("Ada", Some(90))).await.unwrap();

        assert_eq!(talent.id, caller);
        assert_eq!(talent.name, "Ada");
        assert_eq!(talent.hourly_rate, Some(90));
        assert!(talent.skills.is_empty());
        assert!(talent.completed_jobs.is_empty());
        assert!(talent.feedbacks.is_empty());
        assert_eq!(talent.total_rating, None);
        assert_eq!(talent.total_earned, None);
        assert!(talent.created_at <= talent.updated_at);
    }

    #[tokio::test]
    async fn add_talent_twice_is_rejected_and_store_unchanged() {
        let svc = test_service().await;
        let caller = principal("talent-1");

        let first = svc.add_talent(&caller, payload("Ada", None)).await.unwrap();
        let second = svc.add_talent(&caller, payload("Impostor", Some(1))).await;

        assert!(matches!(second, Err(MarketError::BadRequest(_))));
        assert_eq!(svc.db().talents().len(svc.db().conn()).await.unwrap(), 1);
        assert_eq!(svc.get_talent(&caller).await.unwrap(), first);
    }

    #[tokio::test]
    async fn client_cannot_become_talent() {
        let svc = test_service().await;
        let caller = register_client(&svc, "dual", "Acme").await;

        let result = svc.add_talent(&caller, payload("Ada", None)).await;
        assert!(matches!(result, Err(MarketError::BadRequest(_))));
        assert!(svc.db().talents().is_empty(svc.db().conn()).await.unwrap());
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let svc = test_service().await;
        let result = svc.add_talent(&principal("t"), payload("   ", None)).await;
        assert!(matches!(result, Err(MarketError::BadRequest(_))));
    }

    #[tokio::test]
    async fn update_talent_partial() {
        let svc = test_service().await;
        let caller = principal("talent-1");
        let created = svc.add_talent(&caller, payload("Ada", None)).await.unwrap();

        let update = TalentUpdateBuilder::new()
            .skills(vec!["rust".into(), " rust".into(), "sql".into()])
            .hourly_rate(Some(120))
            .build();
        let updated = svc.update_talent(&caller, update).await.unwrap();

        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.skills, vec!["rust", "sql"]);
        assert_eq!(updated.hourly_rate, Some(120));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.created_at <= updated.updated_at);
        assert_eq!(svc.get_talent(&caller).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_requires_talent_account() {
        let svc = test_service().await;
        let update = TalentUpdateBuilder::new().name("Ghost").build();
        let result = svc.update_talent(&principal("ghost"), update).await;
        assert!(matches!(result, Err(MarketError::Unauthorized(_))));
    }
}
