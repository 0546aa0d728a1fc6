//! Tabular input rows.

use chrono::NaiveDate;
use phenoprep_calendar::parse_date;

use crate::error::WeatherError;

/// Column name of the date field.
pub(crate) const DATE_FIELD: &str = "date";
/// Column name of the minimum temperature field.
pub(crate) const TMIN_FIELD: &str = "T_min";
/// Column name of the maximum temperature field.
pub(crate) const TMAX_FIELD: &str = "T_max";

/// One day of a station's weather series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyWeatherRecord {
    /// Calendar day the values belong to.
    pub date: NaiveDate,
    /// Daily minimum temperature (°C).
    pub t_min: f64,
    /// Daily maximum temperature (°C).
    pub t_max: f64,
}

impl DailyWeatherRecord {
    /// Creates a record from a date and its temperature extremes.
    pub fn new(date: NaiveDate, t_min: f64, t_max: f64) -> Self {
        Self { date, t_min, t_max }
    }
}

/// A row as it comes out of a table: every field may be absent and the date
/// is still text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherRow {
    /// Date or date-time text.
    pub date: Option<String>,
    /// Daily minimum temperature (°C).
    pub t_min: Option<f64>,
    /// Daily maximum temperature (°C).
    pub t_max: Option<f64>,
}

impl WeatherRow {
    /// Creates a row with all three fields present.
    pub fn new(date: impl Into<String>, t_min: f64, t_max: f64) -> Self {
        Self {
            date: Some(date.into()),
            t_min: Some(t_min),
            t_max: Some(t_max),
        }
    }

    /// Converts the row into a typed record.
    ///
    /// `row` is the zero-based position of the row in its table and is only
    /// used for error reporting. A time component on the date is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::MissingField`] if the date, `T_min` or `T_max`
    /// is absent (blank date text counts as absent), and
    /// [`WeatherError::InvalidDate`] if the date text is not a valid calendar
    /// date.
    pub fn into_record(self, row: usize) -> Result<DailyWeatherRecord, WeatherError> {
        let date_text = self
            .date
            .filter(|s| !s.trim().is_empty())
            .ok_or(WeatherError::MissingField {
                row,
                field: DATE_FIELD,
            })?;
        let t_min = self.t_min.ok_or(WeatherError::MissingField {
            row,
            field: TMIN_FIELD,
        })?;
        let t_max = self.t_max.ok_or(WeatherError::MissingField {
            row,
            field: TMAX_FIELD,
        })?;

        let date = parse_date(&date_text).map_err(|e| WeatherError::InvalidDate {
            row,
            reason: e.to_string(),
        })?;

        Ok(DailyWeatherRecord { date, t_min, t_max })
    }
}
