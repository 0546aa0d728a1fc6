//! Error types for the phenoprep-calendar crate.

/// Error type for all fallible operations in the phenoprep-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the input is empty or only whitespace.
    #[error("empty date string")]
    Empty,

    /// Returned when the text does not describe a valid calendar date.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD, optionally followed by a time)")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
    },
}
