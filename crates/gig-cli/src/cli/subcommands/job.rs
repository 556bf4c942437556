use clap::Subcommand;

/// Job entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JobCommands {
    /// Post a job as the calling client.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        budget: u64,
        /// Explicit job ID (generated when omitted).
        #[arg(long)]
        id: Option<String>,
    },
    /// Get a job by ID.
    Get { id: String },
    /// List jobs.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        owner: Option<String>,
    },
    /// Bid on a pending job.
    Bid {
        id: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        amount: u64,
    },
    /// Assign a bidding talent to your job.
    Assign {
        id: String,
        #[arg(long)]
        talent: String,
    },
    /// Mark your assigned job as completed.
    Complete { id: String },
    /// Approve and rate completed work.
    Approve {
        id: String,
        #[arg(long)]
        rating: u64,
        #[arg(long)]
        feedback: Option<String>,
    },
}
