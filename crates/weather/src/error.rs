//! Error types for phenoprep-weather.

use chrono::NaiveDate;

/// Error type for all fallible operations in the phenoprep-weather crate.
///
/// Covers malformed input rows, incomplete fill-value overrides, and lookups
/// for days the provider holds no data for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeatherError {
    /// Returned when an input row lacks a required field.
    #[error("row {row}: missing required field '{field}'")]
    MissingField {
        /// Zero-based position of the row in the input sequence.
        row: usize,
        /// Name of the absent field.
        field: &'static str,
    },

    /// Returned when a row's date is not a valid calendar date.
    #[error("row {row}: {reason}")]
    InvalidDate {
        /// Zero-based position of the row in the input sequence.
        row: usize,
        /// Description of the date parsing failure.
        reason: String,
    },

    /// Returned when a fill-value override omits one of the required keys.
    #[error("fill values: missing required key '{key}'")]
    MissingFillValue {
        /// Name of the absent key.
        key: &'static str,
    },

    /// Returned when a fill-value override names a key that is not one of the
    /// eight fill variables.
    #[error("fill values: unknown key '{key}'")]
    UnknownFillValue {
        /// The unrecognised key.
        key: String,
    },

    /// Returned when a fill-value override names the same variable twice
    /// under different spellings.
    #[error("fill values: key '{key}' given more than once")]
    DuplicateFillValue {
        /// Framework name of the repeated variable.
        key: &'static str,
    },

    /// Returned when the provider holds no container for the requested day.
    #[error("no weather data for {day}")]
    NoDataForDay {
        /// The requested day.
        day: NaiveDate,
    },

    /// Returned when a variable name is not recognised.
    #[error("unknown weather variable '{name}'")]
    UnknownVariable {
        /// The unrecognised name.
        name: String,
    },
}
