//! # phenoprep-io
//!
//! Read a station's daily weather series from delimited text into
//! [`DailyWeatherRecord`](phenoprep_weather::DailyWeatherRecord)s ready for
//! [`StationWeatherProvider`](phenoprep_weather::StationWeatherProvider).

mod error;
mod reader;
mod validate;

pub use error::IoError;
pub use reader::{ReaderConfig, read_weather_csv, read_weather_from_reader};
