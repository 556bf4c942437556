use clap::Subcommand;

/// Feedback commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FeedbackCommands {
    /// Leave feedback on another user's profile.
    Add {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        text: String,
    },
    /// Get feedback by ID.
    Get { id: String },
}
