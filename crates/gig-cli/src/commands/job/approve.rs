use gig_core::payloads::ApprovePayload;
use gig_core::views::JobInfo;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    rating: u64,
    feedback: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.require_caller()?;
    let payload = ApprovePayload {
        rating,
        feedback: feedback.map(str::to_string),
    };
    let job = ctx.service.approve_job(caller, id, payload).await?;
    output(&JobInfo::from(&job), flags.format)
}
