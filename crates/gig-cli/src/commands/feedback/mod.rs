use gig_core::payloads::FeedbackPayload;
use gig_core::views::FeedbackInfo;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeedbackCommands;
use crate::commands::shared::parse::parse_principal;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gig feedback`.
pub async fn handle(
    action: &FeedbackCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FeedbackCommands::Add { subject, text } => {
            let caller = ctx.require_caller()?;
            let payload = FeedbackPayload {
                subject: parse_principal(subject, "--subject")?,
                feedback: text.clone(),
            };
            let feedback = ctx.service.add_feedback(caller, payload).await?;
            output(&FeedbackInfo::from(&feedback), flags.format)
        }
        FeedbackCommands::Get { id } => {
            let feedback = ctx.service.get_feedback(id).await?;
            output(&feedback, flags.format)
        }
    }
}
