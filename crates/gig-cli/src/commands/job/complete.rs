use gig_core::views::JobInfo;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let caller = ctx.require_caller()?;
    let job = ctx.service.complete_job(caller, id).await?;
    output(&JobInfo::from(&job), flags.format)
}
