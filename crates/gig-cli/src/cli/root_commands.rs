use clap::{Args, Subcommand};

use crate::cli::subcommands::{ClientCommands, FeedbackCommands, JobCommands, TalentCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the caller's profile, or another user's.
    Profile(ProfileArgs),
    /// Talent accounts.
    Talent {
        #[command(subcommand)]
        action: TalentCommands,
    },
    /// Client accounts.
    Client {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Jobs and their lifecycle.
    Job {
        #[command(subcommand)]
        action: JobCommands,
    },
    /// Profile feedback.
    Feedback {
        #[command(subcommand)]
        action: FeedbackCommands,
    },
}

/// Arguments for `gig profile`.
#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    /// Show this user's public profile instead of your own.
    #[arg(long)]
    pub of: Option<String>,
}
