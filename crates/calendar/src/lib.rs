//! # phenoprep-calendar
//!
//! Gregorian date parsing shared by the weather and agro-management crates.
//!
//! Weather tables and crop calendar templates carry dates as text, sometimes
//! with a time-of-day suffix left behind by spreadsheet or dataframe exports.
//! Everything downstream works on plain calendar dates, so the time component
//! is dropped here.
//!
//! ## Quick Start
//!
//! ```ignore
//! use phenoprep_calendar::{format_date, parse_date};
//!
//! let sowing = parse_date("2022-10-15 00:00:00").unwrap();
//! assert_eq!(format_date(sowing), "2022-10-15");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Date / date-time text parsing and ISO formatting |
//! | `error` | Error types |

mod date;
mod error;

pub use chrono::NaiveDate;
pub use date::{format_date, parse_date};
pub use error::CalendarError;
