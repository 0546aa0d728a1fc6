//! # phenoprep-weather
//!
//! Daily weather containers and the weather-data-provider contract consumed
//! by crop phenology simulations.
//!
//! A phenology-only model needs nothing but minimum and maximum temperature,
//! yet the simulation framework's data contract requires a full set of daily
//! variables. [`StationWeatherProvider`] fills the gap: every input row is
//! combined with the station metadata and a fixed set of [`DefaultFillValues`]
//! into one [`WeatherDataContainer`], stored under its date.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["WeatherRow (loose)"] -->|".into_record()"| B["DailyWeatherRecord"]
//!     B --> C["StationWeatherProvider"]
//!     S["StationMetadata"] --> C
//!     F["DefaultFillValues"] --> C
//!     C -->|"WeatherDataProvider::get(day)"| D["WeatherDataContainer"]
//!     C -->|"WeatherDataProvider::iter()"| E["chronological containers"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use phenoprep_weather::{
//!     DailyWeatherRecord, StationMetadata, StationWeatherProvider, WeatherDataProvider,
//! };
//!
//! let station = StationMetadata::new(430.0, 8.55, 47.37);
//! let records = vec![DailyWeatherRecord::new(day, -1.5, 7.2)];
//! let wdp = StationWeatherProvider::new(records, station);
//! let wdc = wdp.get(day).unwrap();
//! assert_eq!(wdc.tmax(), 7.2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `variable` | Weather variable names and units |
//! | `fill` | Default values for variables the phenology model ignores |
//! | `station` | Station metadata |
//! | `record` | Tabular input rows |
//! | `container` | Per-day weather container |
//! | `provider` | Weather-data-provider trait |
//! | `station_provider` | Provider built from a station's daily series |
//! | `error` | Error types |

mod container;
mod error;
mod fill;
mod provider;
mod record;
mod station;
mod station_provider;
mod variable;

pub use container::WeatherDataContainer;
pub use error::WeatherError;
pub use fill::DefaultFillValues;
pub use provider::WeatherDataProvider;
pub use record::{DailyWeatherRecord, WeatherRow};
pub use station::StationMetadata;
pub use station_provider::StationWeatherProvider;
pub use variable::WeatherVariable;
