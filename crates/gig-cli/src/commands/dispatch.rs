use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Profile(args) => commands::profile::handle(&args, ctx, flags).await,
        Commands::Talent { action } => commands::talent::handle(&action, ctx, flags).await,
        Commands::Client { action } => commands::client::handle(&action, ctx, flags).await,
        Commands::Job { action } => commands::job::handle(&action, ctx, flags).await,
        Commands::Feedback { action } => commands::feedback::handle(&action, ctx, flags).await,
    }
}
