//! Weather provider built from a single station's daily series.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::container::WeatherDataContainer;
use crate::error::WeatherError;
use crate::fill::DefaultFillValues;
use crate::provider::WeatherDataProvider;
use crate::record::{DailyWeatherRecord, WeatherRow};
use crate::station::StationMetadata;

/// Eagerly materialised weather provider for one station.
///
/// Every input record becomes one [`WeatherDataContainer`] at construction
/// time, registered under its date. Temperatures are passed through
/// untouched. When two records share a date the later one wins.
#[derive(Debug, Clone)]
pub struct StationWeatherProvider {
    station: StationMetadata,
    fill: DefaultFillValues,
    store: BTreeMap<NaiveDate, WeatherDataContainer>,
    description: Vec<String>,
}

impl StationWeatherProvider {
    /// Builds a provider using the documented [`DefaultFillValues`].
    pub fn new(
        records: impl IntoIterator<Item = DailyWeatherRecord>,
        station: StationMetadata,
    ) -> Self {
        Self::with_fill_values(records, station, DefaultFillValues::default())
    }

    /// Builds a provider with a complete replacement set of fill values.
    pub fn with_fill_values(
        records: impl IntoIterator<Item = DailyWeatherRecord>,
        station: StationMetadata,
        fill: DefaultFillValues,
    ) -> Self {
        let mut provider = Self {
            station,
            fill,
            store: BTreeMap::new(),
            description: vec![format!(
                "Station weather (lat {}, lon {}, elev {} m)",
                station.latitude, station.longitude, station.elevation
            )],
        };

        let mut n_rows = 0usize;
        for record in records {
            let wdc = WeatherDataContainer::new(&record, &provider.station, &provider.fill);
            provider.store_container(wdc);
            n_rows += 1;
        }

        info!(
            n_rows,
            n_days = provider.store.len(),
            first = ?provider.first_date(),
            last = ?provider.last_date(),
            "weather provider built"
        );
        provider
    }

    /// Builds a provider from loose tabular rows.
    ///
    /// Rows are converted in order; the first malformed row aborts
    /// construction and no provider is returned.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::MissingField`] or [`WeatherError::InvalidDate`]
    /// for the first row that cannot be converted.
    pub fn from_rows(
        rows: impl IntoIterator<Item = WeatherRow>,
        station: StationMetadata,
        fill: DefaultFillValues,
    ) -> Result<Self, WeatherError> {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| row.into_record(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_fill_values(records, station, fill))
    }

    /// Appends a provenance line to the description.
    pub fn with_description(mut self, line: impl Into<String>) -> Self {
        self.description.push(line.into());
        self
    }

    /// Returns the station metadata.
    pub fn station(&self) -> &StationMetadata {
        &self.station
    }

    /// Returns the fill values used for every container.
    pub fn fill_values(&self) -> &DefaultFillValues {
        &self.fill
    }

    fn store_container(&mut self, wdc: WeatherDataContainer) {
        let day = wdc.day();
        if self.store.insert(day, wdc).is_some() {
            debug!(%day, "duplicate date, keeping the later row");
        }
    }
}

impl WeatherDataProvider for StationWeatherProvider {
    fn get(&self, day: NaiveDate) -> Result<&WeatherDataContainer, WeatherError> {
        self.store
            .get(&day)
            .ok_or(WeatherError::NoDataForDay { day })
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &WeatherDataContainer> + '_> {
        Box::new(self.store.values())
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn elevation(&self) -> f64 {
        self.station.elevation
    }

    fn latitude(&self) -> f64 {
        self.station.latitude
    }

    fn longitude(&self) -> f64 {
        self.station.longitude
    }

    fn description(&self) -> &[String] {
        &self.description
    }

    fn first_date(&self) -> Option<NaiveDate> {
        self.store.keys().next().copied()
    }

    fn last_date(&self) -> Option<NaiveDate> {
        self.store.keys().next_back().copied()
    }
}
