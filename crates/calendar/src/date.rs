//! Date and date-time text parsing.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::CalendarError;

/// Date-time layouts accepted in addition to a bare `YYYY-MM-DD`.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parses a calendar date from text.
///
/// Accepts `YYYY-MM-DD` as well as date-times such as `2022-10-15 00:00:00`
/// or `2022-10-15T06:30:00`, in which case only the date part is kept.
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`CalendarError::Empty`] for blank input and
/// [`CalendarError::InvalidDate`] when no accepted layout matches or the date
/// does not exist (e.g. `2021-02-29`).
pub fn parse_date(input: &str) -> Result<NaiveDate, CalendarError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(CalendarError::Empty);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| CalendarError::InvalidDate {
            input: s.to_string(),
        })
}

/// Formats a date as ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_plain_date() {
        assert_eq!(parse_date("2022-10-15").unwrap(), ymd(2022, 10, 15));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_date("  1900-01-01\n").unwrap(), ymd(1900, 1, 1));
    }

    #[test]
    fn parse_datetime_space() {
        assert_eq!(parse_date("2022-10-15 00:00:00").unwrap(), ymd(2022, 10, 15));
    }

    #[test]
    fn parse_datetime_t_separator() {
        assert_eq!(parse_date("2022-10-15T23:59:59").unwrap(), ymd(2022, 10, 15));
    }

    #[test]
    fn parse_datetime_fractional_seconds() {
        assert_eq!(
            parse_date("2022-10-15 12:00:00.250").unwrap(),
            ymd(2022, 10, 15)
        );
    }

    #[test]
    fn parse_datetime_without_seconds() {
        assert_eq!(parse_date("2022-10-15T06:30").unwrap(), ymd(2022, 10, 15));
    }

    #[test]
    fn parse_leap_day() {
        assert_eq!(parse_date("2020-02-29").unwrap(), ymd(2020, 2, 29));
    }

    #[test]
    fn parse_rejects_non_leap_feb_29() {
        assert_eq!(
            parse_date("2021-02-29").unwrap_err(),
            CalendarError::InvalidDate {
                input: "2021-02-29".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_date("yesterday"),
            Err(CalendarError::InvalidDate { .. })
        ));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(parse_date("   ").unwrap_err(), CalendarError::Empty);
    }

    #[test]
    fn format_pads_month_and_day() {
        assert_eq!(format_date(ymd(2022, 3, 7)), "2022-03-07");
    }

    #[test]
    fn format_then_parse_is_identity() {
        let d = ymd(1999, 12, 31);
        assert_eq!(parse_date(&format_date(d)).unwrap(), d);
    }
}
