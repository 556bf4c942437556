use gig_core::views::JobInfo;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_principal;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    talent: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.require_caller()?;
    let talent = parse_principal(talent, "--talent")?;
    let job = ctx.service.assign_talent(caller, id, &talent).await?;
    output(&JobInfo::from(&job), flags.format)
}
