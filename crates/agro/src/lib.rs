//! # phenoprep-agro
//!
//! Specialise agro-management crop calendar templates for one simulation run.
//!
//! A template describes a single cropping campaign keyed by a placeholder
//! date. [`get_agromanager`] loads it and rewrites the campaign key and the
//! crop start date to the actual sowing date; everything else in the template
//! passes through untouched.
//!
//! ## Quick Start
//!
//! ```ignore
//! use phenoprep_agro::get_agromanager;
//!
//! let agro = get_agromanager(sowing_date, Path::new("wheat_calendar.yaml"))?;
//! assert_eq!(agro.crop_start_date()?, sowing_date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `document` | Parsed agro-management document and its accessors |
//! | `configurator` | Template loading and date specialisation |
//! | `error` | Error types |

mod configurator;
mod document;
mod error;

pub use configurator::{CampaignDates, configure, get_agromanager};
pub use document::{
    AGRO_MANAGEMENT_KEY, AgroManagement, CROP_CALENDAR_KEY, CROP_START_DATE_KEY,
};
pub use error::AgroError;
pub use serde_yaml::{Mapping, Value};
