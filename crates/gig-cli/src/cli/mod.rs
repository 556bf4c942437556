use clap::Parser;
use gig_config::{GigConfig, StoreConfig};
use gig_core::identity::Principal;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `gig` binary.
#[derive(Debug, Parser)]
#[command(name = "gig", version, about = "Gigboard - freelance marketplace records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Identity to act as (defaults to general.caller from config)
    #[arg(short, long, global = true)]
    pub caller: Option<String>,

    /// Output format: json, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Database file, or :memory: (defaults to store.path)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Merge command-line flags over configuration. Flags win.
    pub fn global_flags(&self, config: &GigConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_config(&config.general.default_format)?,
        };
        let caller = match self.caller.as_deref() {
            Some(raw) => Some(
                Principal::new(raw).map_err(|e| anyhow::anyhow!("invalid --caller: {e}"))?,
            ),
            None => config.general.caller()?,
        };
        let store = match &self.db {
            Some(path) => StoreConfig { path: path.clone() },
            None => config.store.clone(),
        };

        Ok(GlobalFlags {
            format,
            caller,
            store,
        })
    }
}
