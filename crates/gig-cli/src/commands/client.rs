use gig_core::payloads::ClientPayload;
use gig_core::views::ClientInfo;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gig client`.
pub async fn handle(
    action: &ClientCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClientCommands::Add { name } => {
            let caller = ctx.require_caller()?;
            let client = ctx
                .service
                .add_client(caller, ClientPayload { name: name.clone() })
                .await?;
            output(&ClientInfo::from(&client), flags.format)
        }
    }
}
