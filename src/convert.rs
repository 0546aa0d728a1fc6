//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use phenoprep_calendar::{NaiveDate, parse_date};
use phenoprep_io::ReaderConfig;
use phenoprep_weather::{DefaultFillValues, StationMetadata};

/// Converts a single-character delimiter into the byte the CSV reader expects.
pub fn parse_delimiter(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {c:?}");
    }
    Ok(c as u8)
}

/// Builds a [`ReaderConfig`] from the TOML weather configuration.
pub fn build_reader_config(weather: &WeatherToml) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_date_column(&weather.date_column)
        .with_t_min_column(&weather.t_min_column)
        .with_t_max_column(&weather.t_max_column)
        .with_delimiter(parse_delimiter(weather.delimiter)?);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds [`StationMetadata`] from the `[station]` table, which the weather
/// subcommand requires.
pub fn build_station(station: Option<&StationToml>) -> Result<StationMetadata> {
    let Some(s) = station else {
        bail!("missing [station] table (elevation, longitude, latitude)");
    };
    Ok(StationMetadata::new(s.elevation, s.longitude, s.latitude))
}

/// Builds the fill values: the documented defaults, or a complete
/// replacement when `[weather.fill_values]` is given.
pub fn build_fill_values(weather: &WeatherToml) -> Result<DefaultFillValues> {
    match weather.fill_values {
        Some(ref map) => {
            DefaultFillValues::from_map(map).context("invalid [weather.fill_values]")
        }
        None => Ok(DefaultFillValues::default()),
    }
}

/// Parses an optional date string from the config.
pub fn parse_config_date(value: Option<&str>, key: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|s| parse_date(s).with_context(|| format!("invalid date for {key}")))
        .transpose()
}
