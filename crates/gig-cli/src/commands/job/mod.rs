mod approve;
mod assign;
mod bid;
mod complete;
mod create;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::JobCommands;
use crate::context::AppContext;

/// Handle `gig job`.
pub async fn handle(
    action: &JobCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        JobCommands::Create {
            title,
            description,
            budget,
            id,
        } => create::run(title, description, *budget, id.as_deref(), ctx, flags).await,
        JobCommands::Get { id } => get::run(id, ctx, flags).await,
        JobCommands::List { status, owner } => {
            list::run(status.as_deref(), owner.as_deref(), ctx, flags).await
        }
        JobCommands::Bid { id, text, amount } => bid::run(id, text, *amount, ctx, flags).await,
        JobCommands::Assign { id, talent } => assign::run(id, talent, ctx, flags).await,
        JobCommands::Complete { id } => complete::run(id, ctx, flags).await,
        JobCommands::Approve {
            id,
            rating,
            feedback,
        } => approve::run(id, *rating, feedback.as_deref(), ctx, flags).await,
    }
}
