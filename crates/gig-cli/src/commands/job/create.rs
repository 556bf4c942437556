use gig_core::payloads::JobPayload;
use gig_core::views::JobInfo;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    description: &str,
    budget: u64,
    id: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.require_caller()?;
    let payload = JobPayload {
        id: id.map(str::to_string),
        title: title.to_string(),
        description: description.to_string(),
        budget,
    };
    let job = ctx.service.add_job(caller, payload).await?;
    output(&JobInfo::from(&job), flags.format)
}
