use anyhow::{Context, Result};
use tracing::{info, info_span};

use phenoprep_agro::{CampaignDates, configure, get_agromanager};

use crate::cli::AgroArgs;
use crate::config;
use crate::convert;

/// Specialises the crop calendar template and prints the result as YAML.
pub fn run(args: AgroArgs) -> Result<()> {
    let _span = info_span!("agro").entered();

    let config = config::load(args.config.as_deref())?;
    let template = args
        .template
        .as_ref()
        .or(config.agro.template.as_ref())
        .ok_or_else(|| {
            anyhow::anyhow!("no template path: set [agro].template in config or use --template")
        })?;

    let sowing_date = match args.sowing_date {
        Some(d) => d,
        None => convert::parse_config_date(config.agro.sowing_date.as_deref(), "agro.sowing_date")?
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "no sowing date: set [agro].sowing_date in config or use --sowing-date"
                )
            })?,
    };
    let campaign_date = match args.campaign_date {
        Some(d) => Some(d),
        None => {
            convert::parse_config_date(config.agro.campaign_date.as_deref(), "agro.campaign_date")?
        }
    };

    let agro = match campaign_date {
        Some(campaign_start) => {
            let dates = CampaignDates::new(campaign_start, sowing_date)?;
            configure(template, dates)
        }
        None => get_agromanager(sowing_date, template),
    }
    .with_context(|| format!("failed to configure crop calendar: {}", template.display()))?;

    info!(%sowing_date, ?campaign_date, "crop calendar ready");
    print!("{}", agro.to_yaml_string()?);
    Ok(())
}
