//! Default values for variables the phenology model ignores.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::WeatherError;
use crate::variable::WeatherVariable;

/// Constant values for the eight daily variables that the simulation
/// framework requires but a phenology-only model never reads.
///
/// All eight fields are always present. An override replaces the whole set
/// through [`DefaultFillValues::from_map`]; there is no merging with
/// [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefaultFillValues {
    /// Global radiation (J/m²/day).
    #[serde(rename = "IRRAD")]
    pub irrad: f64,
    /// Vapour pressure (hPa).
    #[serde(rename = "VAP")]
    pub vap: f64,
    /// Precipitation (cm/day).
    #[serde(rename = "RAIN")]
    pub rain: f64,
    /// Potential evaporation from open water (cm/day).
    #[serde(rename = "E0")]
    pub e0: f64,
    /// Potential evaporation from bare soil (cm/day).
    #[serde(rename = "ES0")]
    pub es0: f64,
    /// Reference evapotranspiration (cm/day).
    #[serde(rename = "ET0")]
    pub et0: f64,
    /// Wind speed (m/s).
    #[serde(rename = "WIND")]
    pub wind: f64,
    /// Snow depth (cm).
    #[serde(rename = "SNOWDEPTH")]
    pub snow_depth: f64,
}

impl Default for DefaultFillValues {
    fn default() -> Self {
        Self {
            irrad: 20e6,
            vap: 5.0,
            rain: 2.0,
            e0: 0.5,
            es0: 0.5,
            et0: 0.5,
            wind: 10.0,
            snow_depth: 0.0,
        }
    }
}

impl DefaultFillValues {
    /// The eight fill variables, in declaration order.
    pub const VARIABLES: [WeatherVariable; 8] = [
        WeatherVariable::Irrad,
        WeatherVariable::Vap,
        WeatherVariable::Rain,
        WeatherVariable::E0,
        WeatherVariable::Es0,
        WeatherVariable::Et0,
        WeatherVariable::Wind,
        WeatherVariable::SnowDepth,
    ];

    /// Builds a complete replacement set from a name → value map.
    ///
    /// Keys are matched case-insensitively against the framework variable
    /// names (`IRRAD`, `VAP`, `RAIN`, `E0`, `ES0`, `ET0`, `WIND`,
    /// `SNOWDEPTH`). Each variable must be named exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::UnknownFillValue`] for a key outside the eight
    /// fill variables, [`WeatherError::DuplicateFillValue`] for a variable
    /// named twice (e.g. `IRRAD` and `irrad`), and
    /// [`WeatherError::MissingFillValue`] for the first of the eight that is
    /// absent.
    pub fn from_map(map: &BTreeMap<String, f64>) -> Result<Self, WeatherError> {
        let mut resolved: BTreeMap<WeatherVariable, f64> = BTreeMap::new();
        for (key, &value) in map {
            let var = key
                .parse::<WeatherVariable>()
                .ok()
                .filter(|v| Self::VARIABLES.contains(v))
                .ok_or_else(|| WeatherError::UnknownFillValue { key: key.clone() })?;
            if resolved.insert(var, value).is_some() {
                return Err(WeatherError::DuplicateFillValue { key: var.name() });
            }
        }

        let take = |var: WeatherVariable| {
            resolved
                .get(&var)
                .copied()
                .ok_or(WeatherError::MissingFillValue { key: var.name() })
        };

        Ok(Self {
            irrad: take(WeatherVariable::Irrad)?,
            vap: take(WeatherVariable::Vap)?,
            rain: take(WeatherVariable::Rain)?,
            e0: take(WeatherVariable::E0)?,
            es0: take(WeatherVariable::Es0)?,
            et0: take(WeatherVariable::Et0)?,
            wind: take(WeatherVariable::Wind)?,
            snow_depth: take(WeatherVariable::SnowDepth)?,
        })
    }

    /// Returns the value of one fill variable, or `None` for variables that
    /// are not part of the fill set.
    pub fn get(&self, var: WeatherVariable) -> Option<f64> {
        match var {
            WeatherVariable::Irrad => Some(self.irrad),
            WeatherVariable::Vap => Some(self.vap),
            WeatherVariable::Rain => Some(self.rain),
            WeatherVariable::E0 => Some(self.e0),
            WeatherVariable::Es0 => Some(self.es0),
            WeatherVariable::Et0 => Some(self.et0),
            WeatherVariable::Wind => Some(self.wind),
            WeatherVariable::SnowDepth => Some(self.snow_depth),
            _ => None,
        }
    }

    /// Iterates over `(variable, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (WeatherVariable, f64)> + '_ {
        Self::VARIABLES
            .into_iter()
            .filter_map(|v| self.get(v).map(|x| (v, x)))
    }
}
