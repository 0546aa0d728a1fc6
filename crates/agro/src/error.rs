//! Error types for phenoprep-agro.

use std::path::PathBuf;

use chrono::NaiveDate;
use phenoprep_calendar::CalendarError;

/// Error type for all fallible operations in the phenoprep-agro crate.
///
/// Covers reading the template from disk, YAML syntax errors, and templates
/// whose structure does not match an agro-management document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgroError {
    /// Returned when the template file does not exist on disk.
    #[error("template not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when the template exists but cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps a YAML syntax error.
    #[error("yaml error: {reason}")]
    Parse {
        /// Description of the underlying YAML failure.
        reason: String,
    },

    /// Returned when a required key is absent.
    #[error("missing field '{field}'")]
    MissingField {
        /// Location of the absent key within the document.
        field: String,
    },

    /// Returned when a key holds a value of the wrong kind.
    #[error("field '{field}' must be a {expected}")]
    UnexpectedType {
        /// Location of the offending value within the document.
        field: String,
        /// Kind of value that was expected.
        expected: &'static str,
    },

    /// Returned when the first campaign entry has more than one key.
    #[error("first AgroManagement entry must hold exactly one campaign, found {count}")]
    AmbiguousCampaign {
        /// Number of keys found.
        count: usize,
    },

    /// Returned when the crop would start before its campaign opens.
    #[error("crop start {crop_start} precedes campaign start {campaign_start}")]
    CropStartBeforeCampaign {
        /// First day of the campaign.
        campaign_start: NaiveDate,
        /// Requested crop start date.
        crop_start: NaiveDate,
    },

    /// Wraps a date parsing error from phenoprep-calendar.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
}

impl From<serde_yaml::Error> for AgroError {
    fn from(e: serde_yaml::Error) -> Self {
        AgroError::Parse {
            reason: e.to_string(),
        }
    }
}
