use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProfileArgs;
use crate::commands::shared::parse::parse_principal;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gig profile`.
pub async fn handle(
    args: &ProfileArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let profile = match args.of.as_deref() {
        Some(raw) => {
            let id = parse_principal(raw, "--of")?;
            ctx.service.get_profile_of(&id).await?
        }
        None => ctx.service.get_profile_info(ctx.require_caller()?).await?,
    };
    output(&profile, flags.format)
}
