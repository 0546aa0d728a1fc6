//! Weather variable names and units.

use std::fmt;
use std::str::FromStr;

use crate::error::WeatherError;

/// A named numeric variable held by a [`WeatherDataContainer`](crate::WeatherDataContainer).
///
/// Names follow the simulation framework's upper-case convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeatherVariable {
    /// Latitude of the station (decimal degrees).
    Lat,
    /// Longitude of the station (decimal degrees).
    Lon,
    /// Elevation of the station (m).
    Elev,
    /// Daily minimum temperature (°C).
    Tmin,
    /// Daily maximum temperature (°C).
    Tmax,
    /// Global radiation (J/m²/day).
    Irrad,
    /// Vapour pressure (hPa).
    Vap,
    /// Precipitation (cm/day).
    Rain,
    /// Penman potential evaporation from open water (cm/day).
    E0,
    /// Penman potential evaporation from moist bare soil (cm/day).
    Es0,
    /// Penman or Penman-Monteith reference evapotranspiration (cm/day).
    Et0,
    /// Mean wind speed at 2 m (m/s).
    Wind,
    /// Snow depth (cm).
    SnowDepth,
}

impl WeatherVariable {
    /// Every variable, station metadata first.
    pub const ALL: [WeatherVariable; 13] = [
        Self::Lat,
        Self::Lon,
        Self::Elev,
        Self::Tmin,
        Self::Tmax,
        Self::Irrad,
        Self::Vap,
        Self::Rain,
        Self::E0,
        Self::Es0,
        Self::Et0,
        Self::Wind,
        Self::SnowDepth,
    ];

    /// Upper-case name used by the simulation framework.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lat => "LAT",
            Self::Lon => "LON",
            Self::Elev => "ELEV",
            Self::Tmin => "TMIN",
            Self::Tmax => "TMAX",
            Self::Irrad => "IRRAD",
            Self::Vap => "VAP",
            Self::Rain => "RAIN",
            Self::E0 => "E0",
            Self::Es0 => "ES0",
            Self::Et0 => "ET0",
            Self::Wind => "WIND",
            Self::SnowDepth => "SNOWDEPTH",
        }
    }

    /// Unit of the variable.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Lat | Self::Lon => "Decimal Degree",
            Self::Elev => "m",
            Self::Tmin | Self::Tmax => "Celsius",
            Self::Irrad => "J/m2/day",
            Self::Vap => "hPa",
            Self::Rain | Self::E0 | Self::Es0 | Self::Et0 => "cm/day",
            Self::Wind => "m/sec",
            Self::SnowDepth => "cm",
        }
    }
}

impl fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeatherVariable {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WeatherError::UnknownVariable {
                name: s.to_string(),
            })
    }
}
