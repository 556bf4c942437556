use gig_core::views::TalentInfo;
use gig_db::updates::talent::TalentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: Option<&str>,
    skills: &[String],
    hourly_rate: Option<u64>,
    clear_rate: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = ctx.require_caller()?;

    let mut builder = TalentUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if !skills.is_empty() {
        builder = builder.skills(skills.to_vec());
    }
    if clear_rate {
        builder = builder.hourly_rate(None);
    } else if let Some(rate) = hourly_rate {
        builder = builder.hourly_rate(Some(rate));
    }

    let talent = ctx.service.update_talent(caller, builder.build()).await?;
    output(&TalentInfo::from(&talent), flags.format)
}
