use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use phenoprep_io::read_weather_csv;
use phenoprep_weather::{StationWeatherProvider, WeatherDataProvider};

use crate::cli::WeatherArgs;
use crate::config;
use crate::convert;

/// Reads the station series, builds the provider and prints a summary.
pub fn run(args: WeatherArgs) -> Result<()> {
    let _span = info_span!("weather").entered();

    let config = config::load(args.config.as_deref())?;
    let input = args
        .input
        .as_ref()
        .or(config.weather.input.as_ref())
        .ok_or_else(|| {
            anyhow::anyhow!("no input path: set [weather].input in config or use --input")
        })?;

    let reader_cfg = convert::build_reader_config(&config.weather)?;
    let station = convert::build_station(config.station.as_ref())?;
    let fill = convert::build_fill_values(&config.weather)?;

    let records = read_weather_csv(input, &reader_cfg)
        .with_context(|| format!("failed to read weather table: {}", input.display()))?;

    let wdp = StationWeatherProvider::with_fill_values(records, station, fill)
        .with_description(format!("source: {}", input.display()));

    for line in wdp.description() {
        println!("{line}");
    }
    match (wdp.first_date(), wdp.last_date()) {
        (Some(first), Some(last)) => println!("{} days, {first} to {last}", wdp.len()),
        _ => println!("0 days"),
    }

    if let Some(ref export) = args.export {
        let json = serde_json::to_string_pretty(&wdp.export())
            .context("failed to serialise weather containers")?;
        fs::write(export, json)
            .with_context(|| format!("failed to write export: {}", export.display()))?;
        info!(path = %export.display(), n_days = wdp.len(), "weather exported");
    }

    Ok(())
}
