use clap::Subcommand;

/// Talent account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TalentCommands {
    /// Register the caller as a talent.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        hourly_rate: Option<u64>,
    },
    /// Update the caller's talent profile.
    Update {
        #[arg(long)]
        name: Option<String>,
        /// Replace skills; repeat for several.
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long, conflicts_with = "clear_rate")]
        hourly_rate: Option<u64>,
        /// Remove the hourly rate.
        #[arg(long)]
        clear_rate: bool,
    },
}
