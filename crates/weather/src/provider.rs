//! Weather-data-provider trait.

use chrono::NaiveDate;

use crate::container::WeatherDataContainer;
use crate::error::WeatherError;

/// Supplies daily weather to a simulation run.
///
/// The simulation framework asks for one [`WeatherDataContainer`] per
/// simulated day and walks the series in chronological order. Implementors
/// own their containers; the framework only borrows them.
pub trait WeatherDataProvider {
    /// Returns the container for `day`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::NoDataForDay`] if the provider holds no data
    /// for `day`.
    fn get(&self, day: NaiveDate) -> Result<&WeatherDataContainer, WeatherError>;

    /// Iterates over all containers in chronological order.
    fn iter(&self) -> Box<dyn Iterator<Item = &WeatherDataContainer> + '_>;

    /// Number of days held.
    fn len(&self) -> usize;

    /// Station elevation (m).
    fn elevation(&self) -> f64;

    /// Station latitude (decimal degrees).
    fn latitude(&self) -> f64;

    /// Station longitude (decimal degrees).
    fn longitude(&self) -> f64;

    /// Free-text provenance lines.
    fn description(&self) -> &[String] {
        &[]
    }

    /// Returns `true` if the provider holds no days.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the provider holds data for `day`.
    fn contains(&self, day: NaiveDate) -> bool {
        self.get(day).is_ok()
    }

    /// First day with data.
    fn first_date(&self) -> Option<NaiveDate> {
        self.iter().next().map(WeatherDataContainer::day)
    }

    /// Last day with data.
    fn last_date(&self) -> Option<NaiveDate> {
        self.iter().last().map(WeatherDataContainer::day)
    }

    /// Copies every container out, in chronological order.
    fn export(&self) -> Vec<WeatherDataContainer> {
        self.iter().cloned().collect()
    }
}
