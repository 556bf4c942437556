use clap::ValueEnum;
use gig_config::StoreConfig;
use gig_core::identity::Principal;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

impl OutputFormat {
    /// Parse a configured format name such as `json`.
    pub fn from_config(raw: &str) -> anyhow::Result<Self> {
        <Self as ValueEnum>::from_str(raw, true).map_err(|_| {
            anyhow::anyhow!("invalid general.default_format '{raw}': expected json or raw")
        })
    }
}

/// Global flags resolved against configuration, handed to every handler.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub caller: Option<Principal>,
    pub store: StoreConfig,
}
