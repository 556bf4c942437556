use gig_core::enums::JobStatus;
use gig_db::repos::JobFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_enum, parse_principal};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    owner: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = JobFilter {
        status: status
            .map(|raw| parse_enum::<JobStatus>(raw, "status"))
            .transpose()?,
        owner: owner
            .map(|raw| parse_principal(raw, "--owner"))
            .transpose()?,
    };
    let jobs = ctx.service.list_jobs(&filter).await?;
    output(&jobs, flags.format)
}
