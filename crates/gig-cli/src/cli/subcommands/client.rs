use clap::Subcommand;

/// Client account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// Register the caller as a client.
    Add {
        #[arg(long)]
        name: String,
    },
}
