use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Weather and crop-calendar preparation for phenology simulations.
#[derive(Parser)]
#[command(
    name = "phenoprep",
    version,
    about = "Prepare weather and crop calendar inputs for phenology simulations"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the weather provider from a station's daily series.
    Weather(WeatherArgs),
    /// Specialise a crop calendar template for a sowing date.
    Agro(AgroArgs),
}

/// Arguments for the `weather` subcommand.
#[derive(clap::Args)]
pub struct WeatherArgs {
    /// Path to TOML configuration file (default: ./phenoprep.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override weather table path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write every daily weather container to this JSON file.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Arguments for the `agro` subcommand.
#[derive(clap::Args)]
pub struct AgroArgs {
    /// Path to TOML configuration file (default: ./phenoprep.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override crop calendar template path from config.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Override sowing date from config (YYYY-MM-DD).
    #[arg(short, long, value_parser = parse_date_arg)]
    pub sowing_date: Option<NaiveDate>,

    /// Open the campaign on this date instead of the sowing date.
    #[arg(long, value_parser = parse_date_arg)]
    pub campaign_date: Option<NaiveDate>,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    phenoprep_calendar::parse_date(s).map_err(|e| e.to_string())
}
