//! Profile reads: the caller's own profile and public views of others.

use gig_core::errors::{MarketError, MarketResult};
use gig_core::identity::Principal;
use gig_core::views::{ClientInfo, ProfileInfo, TalentInfo};

use crate::service::MarketService;

impl MarketService {
    /// Profile of the caller, whichever role they hold.
    ///
    /// Talent is checked before client.
    ///
    /// # Errors
    ///
    /// `Unauthorized` if the caller has no account; `InternalError` on
    /// storage failure.
    pub async fn get_profile_info(&self, caller: &Principal) -> MarketResult<ProfileInfo> {
        let conn = self.db().conn();
        if let Some(talent) = self.db().talents().get(conn, caller).await? {
            return Ok(ProfileInfo::Talent(TalentInfo::from(&talent)));
        }
        if let Some(client) = self.db().clients().get(conn, caller).await? {
            return Ok(ProfileInfo::Client(ClientInfo::from(&client)));
        }
        Err(MarketError::Unauthorized("Create an account first.".into()))
    }

    /// Public view of any talent.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` has no talent record.
    pub async fn get_talent_info(&self, id: &Principal) -> MarketResult<TalentInfo> {
        let talent = self.get_talent(id).await?;
        Ok(TalentInfo::from(&talent))
    }

    /// Public view of any client.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` has no client record.
    pub async fn get_client_info(&self, id: &Principal) -> MarketResult<ClientInfo> {
        let client = self.get_client(id).await?;
        Ok(ClientInfo::from(&client))
    }

    /// Public profile of any identity, whichever role they hold.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` has no account.
    pub async fn get_profile_of(&self, id: &Principal) -> MarketResult<ProfileInfo> {
        self.get_profile_info(id).await.map_err(|e| match e {
            MarketError::Unauthorized(_) => MarketError::not_found("profile", id),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{principal, register_client, register_talent, test_service};
    use gig_core::enums::UserRole;

    #[tokio::test]
    async fn unknown_caller_is_unauthorized() {
        let svc = test_service().await;
        let result = svc.get_profile_info(&principal("nobody")).await;
        assert!(matches!(result, Err(MarketError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn talent_profile_has_defaults() {
        let svc = test_service().await;
        let caller = register_talent(&svc, "talent-1", "Ada").await;

        let profile = svc.get_profile_info(&caller).await.unwrap();
        let ProfileInfo::Talent(info) = profile else {
            panic!("expected talent profile");
        };
        assert_eq!(info.name, "Ada");
        assert!(info.skills.is_empty());
        assert!(info.feedbacks.is_empty());
        assert_eq!(info.avg_rating, 0);
    }

    #[tokio::test]
    async fn client_profile_is_returned() {
        let svc = test_service().await;
        let caller = register_client(&svc, "client-1", "Acme").await;

        let profile = svc.get_profile_info(&caller).await.unwrap();
        assert_eq!(profile.role(), UserRole::Client);
        assert_eq!(profile.id(), &caller);
    }

    #[tokio::test]
    async fn public_views_report_not_found() {
        let svc = test_service().await;
        let ghost = principal("ghost");
        assert!(matches!(
            svc.get_talent_info(&ghost).await,
            Err(MarketError::NotFound(_))
        ));
        assert!(matches!(
            svc.get_client_info(&ghost).await,
            Err(MarketError::NotFound(_))
        ));
        assert!(matches!(
            svc.get_profile_of(&ghost).await,
            Err(MarketError::NotFound(_))
        ));
    }
}
