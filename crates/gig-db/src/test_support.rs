//! Shared test utilities for gig-db unit tests.

pub(crate) mod helpers {
    use gig_core::identity::Principal;
    use gig_core::payloads::{ClientPayload, TalentPayload};

    use crate::service::MarketService;

    /// Create an in-memory `MarketService`.
    pub async fn test_service() -> MarketService {
        MarketService::new_local(":memory:").await.unwrap()
    }

    pub fn principal(raw: &str) -> Principal {
        Principal::new(raw).unwrap()
    }

    /// Register `raw` as a talent and return its principal.
    pub async fn register_talent(svc: &MarketService, raw: &str, name: &str) -> Principal {
        let caller = principal(raw);
        svc.add_talent(
            &caller,
            TalentPayload {
                name: name.into(),
                hourly_rate: None,
            },
        )
        .await
        .unwrap();
        caller
    }

    /// Register `raw` as a client and return its principal.
    pub async fn register_client(svc: &MarketService, raw: &str, name: &str) -> Principal {
        let caller = principal(raw);
        svc.add_client(&caller, ClientPayload { name: name.into() })
            .await
            .unwrap();
        caller
    }
}
