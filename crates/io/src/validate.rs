//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus standalone helpers that check
//! reader configuration and table headers.

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Standalone validation helpers
// ---------------------------------------------------------------------------

/// Check that configured column names are non-empty and pairwise distinct.
pub(crate) fn validate_column_names(columns: &[(&str, &str)]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, &(role, name)) in columns.iter().enumerate() {
        if name.trim().is_empty() {
            c.push(format!("{role} column name is empty"));
            continue;
        }
        if let Some(&(other, _)) = columns[..i].iter().find(|(_, n)| *n == name) {
            c.push(format!("{role} column '{name}' is also used for {other}"));
        }
    }

    c
}

/// Check that every required column appears in the header row.
///
/// Records one message per missing column so that a table lacking several
/// columns is reported in one go.
pub(crate) fn validate_required_columns(
    headers: &[&str],
    required: &[&str],
) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for &name in required {
        if !headers.contains(&name) {
            c.push(format!("missing column '{name}'"));
        }
    }

    c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ValidationCollector -------------------------------------------------

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_non_empty_is_err_with_correct_count() {
        let mut c = ValidationCollector::new();
        c.push("error one");
        c.push("error two");
        assert!(!c.is_empty());
        assert_eq!(c.len(), 2);

        let err = c.finish().unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "error one; error two");
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    // -- validate_column_names -----------------------------------------------

    #[test]
    fn column_names_distinct_is_empty() {
        let c = validate_column_names(&[("date", "date"), ("t_min", "T_min"), ("t_max", "T_max")]);
        assert!(c.is_empty());
    }

    #[test]
    fn column_names_empty_and_duplicate() {
        let c = validate_column_names(&[("date", " "), ("t_min", "T"), ("t_max", "T")]);
        assert_eq!(c.len(), 2);

        let err = c.finish().unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("date column name is empty"));
                assert!(details.contains("t_max column 'T' is also used for t_min"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    // -- validate_required_columns -------------------------------------------

    #[test]
    fn required_columns_present_is_empty() {
        let c = validate_required_columns(&["date", "T_min", "T_max", "RH"], &["date", "T_max"]);
        assert!(c.is_empty());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn required_columns_all_missing_reported() {
        let c = validate_required_columns(&["day", "tmin"], &["date", "T_min", "T_max"]);
        assert_eq!(c.len(), 3);

        let err = c.finish().unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 3);
                assert!(details.contains("missing column 'date'"));
                assert!(details.contains("missing column 'T_min'"));
                assert!(details.contains("missing column 'T_max'"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn required_columns_are_case_sensitive() {
        let c = validate_required_columns(&["Date"], &["date"]);
        assert_eq!(c.len(), 1);
    }
}
