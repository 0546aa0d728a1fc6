//! Error types for phenoprep-io.

use std::path::PathBuf;

use phenoprep_weather::WeatherError;

/// Error type for all fallible operations in the phenoprep-io crate.
///
/// This enum covers file access and CSV decoding failures, header and configuration
/// validation problems, unparsable cells, and row conversion errors
/// encountered when reading weather tables.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when an existing file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a numeric cell cannot be parsed.
    #[error("row {row}: column '{column}' has non-numeric value {value:?}")]
    InvalidNumber {
        /// Zero-based data row index (header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// The offending cell text.
        value: String,
    },

    /// Wraps a row conversion error from phenoprep-weather.
    #[error("weather data error: {0}")]
    Weather(#[from] WeatherError),
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
