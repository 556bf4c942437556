use gig_core::payloads::BidPayload;
use gig_core::views::JobInfo;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    text: &str,
    amount: u64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.require_caller()?;
    let payload = BidPayload {
        bid_text: text.to_string(),
        bid_amount: amount,
    };
    let job = ctx.service.bid_on_job(caller, id, payload).await?;
    output(&JobInfo::from(&job), flags.format)
}
