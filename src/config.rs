use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Configuration file looked up in the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG: &str = "phenoprep.toml";

/// Top-level phenoprep configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhenoprepConfig {
    /// Weather station location.
    #[serde(default)]
    pub station: Option<StationToml>,

    /// Weather table settings.
    #[serde(default)]
    pub weather: WeatherToml,

    /// Crop calendar settings.
    #[serde(default)]
    pub agro: AgroToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationToml {
    pub elevation: f64,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherToml {
    pub input: Option<PathBuf>,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_t_min_column")]
    pub t_min_column: String,
    #[serde(default = "default_t_max_column")]
    pub t_max_column: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Complete replacement for the default fill values; all eight keys
    /// must be given.
    #[serde(default)]
    pub fill_values: Option<BTreeMap<String, f64>>,
}

impl Default for WeatherToml {
    fn default() -> Self {
        Self {
            input: None,
            date_column: default_date_column(),
            t_min_column: default_t_min_column(),
            t_max_column: default_t_max_column(),
            delimiter: default_delimiter(),
            fill_values: None,
        }
    }
}

fn default_date_column() -> String {
    "date".to_string()
}
fn default_t_min_column() -> String {
    "T_min".to_string()
}
fn default_t_max_column() -> String {
    "T_max".to_string()
}
fn default_delimiter() -> char {
    ','
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgroToml {
    pub template: Option<PathBuf>,
    pub sowing_date: Option<String>,
    pub campaign_date: Option<String>,
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `phenoprep.toml` in the working
/// directory is used if present, otherwise every setting takes its default.
pub fn load(path: Option<&Path>) -> Result<PhenoprepConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
        None => {
            debug!("no config file, using defaults");
            return Ok(PhenoprepConfig::default());
        }
    };

    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: PhenoprepConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
