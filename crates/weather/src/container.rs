//! Per-day weather container.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::WeatherError;
use crate::fill::DefaultFillValues;
use crate::record::DailyWeatherRecord;
use crate::station::StationMetadata;
use crate::variable::WeatherVariable;

/// All weather variables for one day at one station, in the shape the
/// simulation framework's weather contract expects.
///
/// Built once per input row and never mutated afterwards. Serializes with the
/// framework's upper-case variable names (`DAY`, `LAT`, `LON`, `ELEV`, `TMIN`,
/// `TMAX`, then the eight fill variables).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherDataContainer {
    #[serde(rename = "DAY")]
    day: NaiveDate,
    #[serde(rename = "LAT")]
    lat: f64,
    #[serde(rename = "LON")]
    lon: f64,
    #[serde(rename = "ELEV")]
    elev: f64,
    #[serde(rename = "TMIN")]
    tmin: f64,
    #[serde(rename = "TMAX")]
    tmax: f64,
    #[serde(flatten)]
    fill: DefaultFillValues,
}

impl WeatherDataContainer {
    /// Combines one day's record with station metadata and fill values.
    pub fn new(
        record: &DailyWeatherRecord,
        station: &StationMetadata,
        fill: &DefaultFillValues,
    ) -> Self {
        Self {
            day: record.date,
            lat: station.latitude,
            lon: station.longitude,
            elev: station.elevation,
            tmin: record.t_min,
            tmax: record.t_max,
            fill: *fill,
        }
    }

    /// Returns the day.
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Returns the station latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the station longitude.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns the station elevation.
    pub fn elev(&self) -> f64 {
        self.elev
    }

    /// Returns the daily minimum temperature.
    pub fn tmin(&self) -> f64 {
        self.tmin
    }

    /// Returns the daily maximum temperature.
    pub fn tmax(&self) -> f64 {
        self.tmax
    }

    /// Returns the fill values carried by this container.
    pub fn fill_values(&self) -> &DefaultFillValues {
        &self.fill
    }

    /// Returns the value of a variable.
    pub fn get(&self, var: WeatherVariable) -> f64 {
        match var {
            WeatherVariable::Lat => self.lat,
            WeatherVariable::Lon => self.lon,
            WeatherVariable::Elev => self.elev,
            WeatherVariable::Tmin => self.tmin,
            WeatherVariable::Tmax => self.tmax,
            WeatherVariable::Irrad => self.fill.irrad,
            WeatherVariable::Vap => self.fill.vap,
            WeatherVariable::Rain => self.fill.rain,
            WeatherVariable::E0 => self.fill.e0,
            WeatherVariable::Es0 => self.fill.es0,
            WeatherVariable::Et0 => self.fill.et0,
            WeatherVariable::Wind => self.fill.wind,
            WeatherVariable::SnowDepth => self.fill.snow_depth,
        }
    }

    /// Returns the value of a variable looked up by its framework name.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::UnknownVariable`] if `name` is not a known
    /// variable.
    pub fn get_by_name(&self, name: &str) -> Result<f64, WeatherError> {
        name.parse::<WeatherVariable>().map(|v| self.get(v))
    }

    /// Iterates over every `(variable, value)` pair.
    pub fn variables(&self) -> impl Iterator<Item = (WeatherVariable, f64)> + '_ {
        WeatherVariable::ALL.into_iter().map(|v| (v, self.get(v)))
    }
}
