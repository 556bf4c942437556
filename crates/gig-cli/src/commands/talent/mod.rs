mod add;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TalentCommands;
use crate::context::AppContext;

/// Handle `gig talent`.
pub async fn handle(
    action: &TalentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TalentCommands::Add { name, hourly_rate } => {
            add::run(name, *hourly_rate, ctx, flags).await
        }
        TalentCommands::Update {
            name,
            skills,
            hourly_rate,
            clear_rate,
        } => {
            update::run(
                name.as_deref(),
                skills,
                *hourly_rate,
                *clear_rate,
                ctx,
                flags,
            )
            .await
        }
    }
}
