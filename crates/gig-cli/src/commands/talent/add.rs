use gig_core::payloads::TalentPayload;
use gig_core::views::TalentInfo;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    hourly_rate: Option<u64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.require_caller()?;
    let talent = ctx
        .service
        .add_talent(
            caller,
            TalentPayload {
                name: name.to_string(),
                hourly_rate,
            },
        )
        .await?;
    output(&TalentInfo::from(&talent), flags.format)
}
