//! Client repository: registration and lookup.

use gig_core::entities::Client;
use gig_core::errors::{MarketError, MarketResult};
use gig_core::identity::Principal;
use gig_core::payloads::ClientPayload;

use crate::helpers::{now, require_text};
use crate::service::MarketService;

impl MarketService {
    /// Register the caller as a client.
    ///
    /// # Errors
    ///
    /// `BadRequest` for a blank name, an existing client account, or an
    /// existing talent account.
    pub async fn add_client(
        &self,
        caller: &Principal,
        payload: ClientPayload,
    ) -> MarketResult<Client> {
        let name = require_text("name", &payload.name)?;
        let conn = self.db().conn();

        if self.db().clients().contains_key(conn, caller).await? {
            return Err(MarketError::bad_request("You already have a client account"));
        }
        if self.db().talents().contains_key(conn, caller).await? {
            return Err(MarketError::bad_request(
                "You already have a talent account; one identity holds one role",
            ));
        }

        let now = now();
        let client = Client {
            id: caller.clone(),
            name,
            completed_jobs: Vec::new(),
            total_spent: None,
            feedbacks: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.db().clients().insert(conn, caller, &client).await?;
        tracing::debug!(%caller, "client registered");

        Ok(client)
    }

    /// Fetch a client record.
    ///
    /// # Errors
    ///
    /// `NotFound` if `id` has no client record.
    pub async fn get_client(&self, id: &Principal) -> MarketResult<Client> {
        self.db()
            .clients()
            .get(self.db().conn(), id)
            .await?
            .ok_or_else(|| MarketError::not_found("client", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{principal, register_talent, test_service};

    #[tokio::test]
    async fn add_client_roundtrip() {
        let svc = test_service().await;
        let caller = principal("client-1");

        let client = svc
            .add_client(&caller, ClientPayload { name: " Acme ".into() })
            .await
            .unwrap();
        assert_eq!(client.name, "Acme");
        assert_eq!(client.total_spent, None);
        assert_eq!(svc.get_client(&caller).await.unwrap(), client);
    }

    #[tokio::test]
    async fn duplicate_client_is_rejected() {
        let svc = test_service().await;
        let caller = principal("client-1");
        let payload = ClientPayload { name: "Acme".into() };

        svc.add_client(&caller, payload.clone()).await.unwrap();
        let second = svc.add_client(&caller, payload).await;
        assert!(matches!(second, Err(MarketError::BadRequest(_))));
    }

    #[tokio::test]
    async fn talent_cannot_become_client() {
        let svc = test_service().await;
        let caller = register_talent(&svc, "dual", "Ada").await;

        let result = svc
            .add_client(&caller, ClientPayload { name: "Acme".into() })
            .await;
        assert!(matches!(result, Err(MarketError::BadRequest(_))));
    }
}
