//! Weather table reader configuration and orchestration.

use std::io::Read;
use std::path::Path;

use phenoprep_weather::{DailyWeatherRecord, WeatherRow};
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading a daily weather table from delimited text.
///
/// Use the builder methods (`with_*`) to customise column names and the
/// delimiter. The [`Default`] implementation expects a comma-separated file
/// with `date`, `T_min` and `T_max` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Column holding the date (or date-time) of each row.
    date_column: String,
    /// Column holding the daily minimum temperature.
    t_min_column: String,
    /// Column holding the daily maximum temperature.
    t_max_column: String,
    /// Field delimiter.
    delimiter: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_column: "date".into(),
            t_min_column: "T_min".into(),
            t_max_column: "T_max".into(),
            delimiter: b',',
        }
    }
}

impl ReaderConfig {
    /// Set the date column name.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Set the minimum temperature column name.
    pub fn with_t_min_column(mut self, name: impl Into<String>) -> Self {
        self.t_min_column = name.into();
        self
    }

    /// Set the maximum temperature column name.
    pub fn with_t_max_column(mut self, name: impl Into<String>) -> Self {
        self.t_max_column = name.into();
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if a column name is empty, two roles
    /// share a column, or the delimiter is a quote or line break.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = validate::validate_column_names(&[
            ("date", self.date_column.as_str()),
            ("t_min", self.t_min_column.as_str()),
            ("t_max", self.t_max_column.as_str()),
        ]);
        if matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            c.push(format!(
                "delimiter {:?} is not usable",
                char::from(self.delimiter)
            ));
        }
        c.finish()
    }
}

// ---------------------------------------------------------------------------
// read_weather_csv
// ---------------------------------------------------------------------------

/// Read a daily weather series from a delimited text file with a header row.
///
/// Rows are returned in file order. Cells are trimmed; an empty cell counts
/// as a missing field. Columns other than the three configured ones are
/// ignored.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Io`] if it exists but cannot be read (e.g. a directory),
/// [`IoError::Validation`] for an invalid configuration or missing columns,
/// [`IoError::InvalidNumber`] for a non-numeric temperature cell,
/// [`IoError::Weather`] for a row with a missing field or invalid date, and
/// [`IoError::Csv`] for malformed delimited text.
pub fn read_weather_csv(
    path: &Path,
    config: &ReaderConfig,
) -> Result<Vec<DailyWeatherRecord>, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), "reading weather table");
    let bytes = std::fs::read(path).map_err(|e| IoError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    read_weather_from_reader(bytes.as_slice(), config)
}

/// Read a daily weather series from any byte source.
///
/// Same semantics as [`read_weather_csv`] without the file lookup.
///
/// # Errors
///
/// See [`read_weather_csv`].
pub fn read_weather_from_reader<R: Read>(
    source: R,
    config: &ReaderConfig,
) -> Result<Vec<DailyWeatherRecord>, IoError> {
    config.validate()?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(csv::Trim::All)
        .has_headers(true)
        .from_reader(source);

    // -- Header -------------------------------------------------------------

    let headers = rdr.headers()?.clone();
    let header_names: Vec<&str> = headers.iter().collect();
    let required = [
        config.date_column.as_str(),
        config.t_min_column.as_str(),
        config.t_max_column.as_str(),
    ];
    validate::validate_required_columns(&header_names, &required).finish()?;

    let column_index = |name: &str| {
        header_names
            .iter()
            .position(|h| *h == name)
            .ok_or_else(|| IoError::Validation {
                count: 1,
                details: format!("missing column '{name}'"),
            })
    };
    let date_idx = column_index(config.date_column.as_str())?;
    let t_min_idx = column_index(config.t_min_column.as_str())?;
    let t_max_idx = column_index(config.t_max_column.as_str())?;
    debug!(date_idx, t_min_idx, t_max_idx, "resolved weather columns");

    // -- Rows ---------------------------------------------------------------

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).filter(|s| !s.is_empty());

        let row = WeatherRow {
            date: cell(date_idx).map(str::to_string),
            t_min: parse_number(cell(t_min_idx), i, &config.t_min_column)?,
            t_max: parse_number(cell(t_max_idx), i, &config.t_max_column)?,
        };
        records.push(row.into_record(i)?);
    }

    info!(n_rows = records.len(), "weather table loaded");
    Ok(records)
}

/// Parse an optional numeric cell. `NaN` spellings count as missing.
fn parse_number(cell: Option<&str>, row: usize, column: &str) -> Result<Option<f64>, IoError> {
    let Some(text) = cell else {
        return Ok(None);
    };
    let value: f64 = text.parse().map_err(|_| IoError::InvalidNumber {
        row,
        column: column.to_string(),
        value: text.to_string(),
    })?;
    Ok((!value.is_nan()).then_some(value))
}
