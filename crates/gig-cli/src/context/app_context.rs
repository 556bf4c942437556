use anyhow::Context;
use gig_core::identity::Principal;
use gig_db::service::MarketService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: MarketService,
    pub caller: Option<Principal>,
}

impl AppContext {
    /// Open the record store named by the resolved flags.
    pub async fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("failed to determine current directory")?;
        let path = flags.store.resolve(&cwd);
        if !flags.store.is_in_memory() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create database directory {}", parent.display())
                })?;
            }
        }

        let db = path.to_string_lossy();
        let service = MarketService::new_local(&db)
            .await
            .with_context(|| format!("failed to open record store at {db}"))?;
        tracing::debug!(%db, caller = ?flags.caller, "application context ready");

        Ok(Self {
            service,
            caller: flags.caller.clone(),
        })
    }

    /// The acting identity, required by every operation that depends on who calls.
    pub fn require_caller(&self) -> anyhow::Result<&Principal> {
        self.caller.as_ref().context(
            "no caller identity: pass --caller or set general.caller (GIGBOARD_GENERAL__CALLER)",
        )
    }
}
