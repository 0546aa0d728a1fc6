//! Agro-management document wrapper.

use std::path::Path;

use chrono::NaiveDate;
use phenoprep_calendar::{format_date, parse_date};
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::configurator::CampaignDates;
use crate::error::AgroError;

/// Top-level key holding the list of campaigns.
pub const AGRO_MANAGEMENT_KEY: &str = "AgroManagement";
/// Key of the crop calendar block inside a campaign.
pub const CROP_CALENDAR_KEY: &str = "CropCalendar";
/// Key of the crop start date inside the crop calendar.
pub const CROP_START_DATE_KEY: &str = "crop_start_date";

/// A parsed agro-management document.
///
/// Wraps the raw YAML tree so that everything the template carries
/// (variety, end conditions, timed and state events, later campaigns, key
/// order) reaches the simulation framework untouched. Only the first
/// campaign's key and its `crop_start_date` are ever rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct AgroManagement {
    doc: Value,
}

impl AgroManagement {
    /// Wraps an already parsed YAML tree.
    pub fn from_value(doc: Value) -> Self {
        Self { doc }
    }

    /// Parses a document from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`AgroError::Parse`] if `text` is not valid YAML.
    pub fn from_yaml_str(text: &str) -> Result<Self, AgroError> {
        let doc: Value = serde_yaml::from_str(text)?;
        Ok(Self { doc })
    }

    /// Reads and parses a document from disk.
    ///
    /// The file is trusted input and is read in full.
    ///
    /// # Errors
    ///
    /// Returns [`AgroError::FileNotFound`] if `path` does not exist,
    /// [`AgroError::Io`] if it cannot be read, and [`AgroError::Parse`] if its
    /// content is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, AgroError> {
        if !path.exists() {
            return Err(AgroError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|e| AgroError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read agro-management template");
        Self::from_yaml_str(&text)
    }

    /// Number of entries in the `AgroManagement` list.
    ///
    /// # Errors
    ///
    /// Returns [`AgroError::MissingField`] or [`AgroError::UnexpectedType`]
    /// if the list is absent or not a list.
    pub fn campaigns(&self) -> Result<usize, AgroError> {
        campaign_list(&self.doc).map(Vec::len)
    }

    /// Key of the first campaign, as stored in the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not have the expected shape.
    pub fn campaign_key(&self) -> Result<&Value, AgroError> {
        let entry = first_entry(&self.doc)?;
        entry.keys().next().ok_or_else(|| missing(campaign_path()))
    }

    /// Date of the first campaign.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not have the expected shape or
    /// the key is not a date.
    pub fn campaign_date(&self) -> Result<NaiveDate, AgroError> {
        value_to_date(self.campaign_key()?, &campaign_path())
    }

    /// The first campaign's `CropCalendar` block.
    ///
    /// # Errors
    ///
    /// Returns [`AgroError::MissingField`] if the block is absent and
    /// [`AgroError::UnexpectedType`] if it is not a mapping.
    pub fn crop_calendar(&self) -> Result<&Mapping, AgroError> {
        let entry = first_entry(&self.doc)?;
        let (key, body) = entry.iter().next().ok_or_else(|| missing(campaign_path()))?;
        let path = calendar_path(key);
        body.get(CROP_CALENDAR_KEY)
            .ok_or_else(|| missing(path.clone()))?
            .as_mapping()
            .ok_or(AgroError::UnexpectedType {
                field: path,
                expected: "mapping",
            })
    }

    /// The first campaign's `crop_start_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the crop calendar or its start date is absent or
    /// the value is not a date.
    pub fn crop_start_date(&self) -> Result<NaiveDate, AgroError> {
        let calendar = self.crop_calendar()?;
        let path = format!("{CROP_CALENDAR_KEY}.{CROP_START_DATE_KEY}");
        let value = calendar
            .get(CROP_START_DATE_KEY)
            .ok_or_else(|| missing(path.clone()))?;
        value_to_date(value, &path)
    }

    /// Rewrites the first campaign for an actual season.
    ///
    /// The placeholder campaign key is replaced by `dates.campaign_start` and
    /// `CropCalendar.crop_start_date` by `dates.crop_start`. Dates are written
    /// as ISO `YYYY-MM-DD` scalars. The document is checked before anything
    /// is changed, so on error it is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`AgroError::MissingField`], [`AgroError::UnexpectedType`] or
    /// [`AgroError::AmbiguousCampaign`] if the document does not have the
    /// expected shape.
    pub fn specialize(&mut self, dates: CampaignDates) -> Result<(), AgroError> {
        let entry = first_entry_mut(&mut self.doc)?;
        let placeholder = entry
            .keys()
            .next()
            .cloned()
            .ok_or_else(|| missing(campaign_path()))?;
        let path = calendar_path(&placeholder);

        let calendar = entry
            .get_mut(&placeholder)
            .and_then(|body| body.get_mut(CROP_CALENDAR_KEY))
            .ok_or_else(|| missing(path.clone()))?
            .as_mapping_mut()
            .ok_or(AgroError::UnexpectedType {
                field: path,
                expected: "mapping",
            })?;
        calendar.insert(
            Value::String(CROP_START_DATE_KEY.to_string()),
            date_value(dates.crop_start),
        );

        if let Some(body) = entry.remove(&placeholder) {
            entry.insert(date_value(dates.campaign_start), body);
        }
        debug!(
            placeholder = %key_label(&placeholder),
            campaign_start = %dates.campaign_start,
            crop_start = %dates.crop_start,
            "campaign specialised"
        );
        Ok(())
    }

    /// Borrows the underlying YAML tree.
    pub fn as_value(&self) -> &Value {
        &self.doc
    }

    /// Consumes the document and returns the underlying YAML tree.
    pub fn into_value(self) -> Value {
        self.doc
    }

    /// Renders the document as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`AgroError::Parse`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, AgroError> {
        Ok(serde_yaml::to_string(&self.doc)?)
    }
}

// ---------------------------------------------------------------------------
// Tree navigation
// ---------------------------------------------------------------------------

fn missing(field: String) -> AgroError {
    AgroError::MissingField { field }
}

fn first_entry_path() -> String {
    format!("{AGRO_MANAGEMENT_KEY}[0]")
}

fn campaign_path() -> String {
    format!("{AGRO_MANAGEMENT_KEY}[0].<campaign date>")
}

fn calendar_path(key: &Value) -> String {
    format!(
        "{AGRO_MANAGEMENT_KEY}[0].{}.{CROP_CALENDAR_KEY}",
        key_label(key)
    )
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

fn date_value(date: NaiveDate) -> Value {
    Value::String(format_date(date))
}

fn value_to_date(value: &Value, field: &str) -> Result<NaiveDate, AgroError> {
    match value {
        Value::String(s) => Ok(parse_date(s)?),
        _ => Err(AgroError::UnexpectedType {
            field: field.to_string(),
            expected: "date",
        }),
    }
}

fn campaign_list(doc: &Value) -> Result<&Vec<Value>, AgroError> {
    doc.get(AGRO_MANAGEMENT_KEY)
        .ok_or_else(|| missing(AGRO_MANAGEMENT_KEY.to_string()))?
        .as_sequence()
        .ok_or(AgroError::UnexpectedType {
            field: AGRO_MANAGEMENT_KEY.to_string(),
            expected: "list",
        })
}

fn check_single(entry: &Mapping) -> Result<(), AgroError> {
    match entry.len() {
        0 => Err(missing(campaign_path())),
        1 => Ok(()),
        count => Err(AgroError::AmbiguousCampaign { count }),
    }
}

fn first_entry(doc: &Value) -> Result<&Mapping, AgroError> {
    let entry = campaign_list(doc)?
        .first()
        .ok_or_else(|| missing(first_entry_path()))?
        .as_mapping()
        .ok_or(AgroError::UnexpectedType {
            field: first_entry_path(),
            expected: "mapping",
        })?;
    check_single(entry)?;
    Ok(entry)
}

fn first_entry_mut(doc: &mut Value) -> Result<&mut Mapping, AgroError> {
    let entry = doc
        .get_mut(AGRO_MANAGEMENT_KEY)
        .ok_or_else(|| missing(AGRO_MANAGEMENT_KEY.to_string()))?
        .as_sequence_mut()
        .ok_or(AgroError::UnexpectedType {
            field: AGRO_MANAGEMENT_KEY.to_string(),
            expected: "list",
        })?
        .first_mut()
        .ok_or_else(|| missing(first_entry_path()))?
        .as_mapping_mut()
        .ok_or(AgroError::UnexpectedType {
            field: first_entry_path(),
            expected: "mapping",
        })?;
    check_single(entry)?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "\
AgroManagement:
- 1900-01-01:
    CropCalendar:
      crop_name: wheat
      variety_name: X
      crop_start_date: 1900-01-01
      crop_start_type: sowing
      crop_end_date: 1900-12-31
      crop_end_type: maturity
      max_duration: 300
    TimedEvents: null
    StateEvents: null
";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accessors_on_template() {
        let doc = AgroManagement::from_yaml_str(TEMPLATE).unwrap();
        assert_eq!(doc.campaigns().unwrap(), 1);
        assert_eq!(doc.campaign_date().unwrap(), ymd(1900, 1, 1));
        assert_eq!(doc.crop_start_date().unwrap(), ymd(1900, 1, 1));
        assert_eq!(
            doc.crop_calendar().unwrap().get("variety_name"),
            Some(&Value::String("X".to_string()))
        );
    }

    #[test]
    fn specialize_rewrites_key_and_start() {
        let mut doc = AgroManagement::from_yaml_str(TEMPLATE).unwrap();
        doc.specialize(CampaignDates::from_sowing(ymd(2022, 10, 15)))
            .unwrap();
        assert_eq!(doc.campaign_date().unwrap(), ymd(2022, 10, 15));
        assert_eq!(doc.crop_start_date().unwrap(), ymd(2022, 10, 15));
        assert_eq!(
            doc.crop_calendar().unwrap().get("crop_end_date"),
            Some(&Value::String("1900-12-31".to_string()))
        );
    }

    #[test]
    fn specialize_keeps_calendar_key_order() {
        let mut doc = AgroManagement::from_yaml_str(TEMPLATE).unwrap();
        doc.specialize(CampaignDates::from_sowing(ymd(2022, 10, 15)))
            .unwrap();
        let keys: Vec<_> = doc
            .crop_calendar()
            .unwrap()
            .keys()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(
            keys,
            vec![
                "crop_name",
                "variety_name",
                "crop_start_date",
                "crop_start_type",
                "crop_end_date",
                "crop_end_type",
                "max_duration",
            ]
        );
    }

    #[test]
    fn specialize_inserts_absent_start_date() {
        let mut doc = AgroManagement::from_yaml_str(
            "AgroManagement:\n- 2000-01-01:\n    CropCalendar:\n      crop_name: maize\n",
        )
        .unwrap();
        doc.specialize(CampaignDates::from_sowing(ymd(2021, 4, 20)))
            .unwrap();
        assert_eq!(doc.crop_start_date().unwrap(), ymd(2021, 4, 20));
    }

    #[test]
    fn specialize_missing_calendar_leaves_document_unchanged() {
        let text = "AgroManagement:\n- 1900-01-01:\n    TimedEvents: null\n";
        let mut doc = AgroManagement::from_yaml_str(text).unwrap();
        let before = doc.clone();

        let err = doc
            .specialize(CampaignDates::from_sowing(ymd(2022, 10, 15)))
            .unwrap_err();
        assert_eq!(
            err,
            AgroError::MissingField {
                field: "AgroManagement[0].1900-01-01.CropCalendar".to_string()
            }
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn null_crop_calendar_is_unexpected_type() {
        let text = "AgroManagement:\n- 1900-01-01:\n    CropCalendar: null\n";
        let mut doc = AgroManagement::from_yaml_str(text).unwrap();
        assert!(matches!(
            doc.specialize(CampaignDates::from_sowing(ymd(2022, 10, 15))),
            Err(AgroError::UnexpectedType {
                expected: "mapping",
                ..
            })
        ));
    }

    #[test]
    fn missing_agro_management() {
        let doc = AgroManagement::from_yaml_str("Version: 1.0\n").unwrap();
        assert_eq!(
            doc.campaign_key().unwrap_err(),
            AgroError::MissingField {
                field: "AgroManagement".to_string()
            }
        );
    }

    #[test]
    fn null_document_is_missing_agro_management() {
        let doc = AgroManagement::from_yaml_str("~\n").unwrap();
        assert!(matches!(
            doc.campaigns(),
            Err(AgroError::MissingField { .. })
        ));
    }

    #[test]
    fn agro_management_not_a_list() {
        let doc = AgroManagement::from_yaml_str("AgroManagement: 3\n").unwrap();
        assert_eq!(
            doc.campaigns().unwrap_err(),
            AgroError::UnexpectedType {
                field: "AgroManagement".to_string(),
                expected: "list"
            }
        );
    }

    #[test]
    fn empty_campaign_list() {
        let doc = AgroManagement::from_yaml_str("AgroManagement: []\n").unwrap();
        assert_eq!(
            doc.campaign_key().unwrap_err(),
            AgroError::MissingField {
                field: "AgroManagement[0]".to_string()
            }
        );
    }

    #[test]
    fn two_keys_in_first_entry_is_ambiguous() {
        let text = "\
AgroManagement:
- 1900-01-01:
    CropCalendar: {crop_start_date: 1900-01-01}
  1901-01-01:
    CropCalendar: {crop_start_date: 1901-01-01}
";
        let mut doc = AgroManagement::from_yaml_str(text).unwrap();
        assert_eq!(
            doc.specialize(CampaignDates::from_sowing(ymd(2022, 10, 15)))
                .unwrap_err(),
            AgroError::AmbiguousCampaign { count: 2 }
        );
    }

    #[test]
    fn non_date_campaign_key() {
        let doc =
            AgroManagement::from_yaml_str("AgroManagement:\n- 42:\n    CropCalendar: {}\n")
                .unwrap();
        assert!(matches!(
            doc.campaign_date(),
            Err(AgroError::UnexpectedType {
                expected: "date",
                ..
            })
        ));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = AgroManagement::from_yaml_str("AgroManagement: [\n").unwrap_err();
        assert!(matches!(err, AgroError::Parse { .. }));
    }

    #[test]
    fn to_yaml_string_round_trips() {
        let mut doc = AgroManagement::from_yaml_str(TEMPLATE).unwrap();
        doc.specialize(CampaignDates::from_sowing(ymd(2022, 10, 15)))
            .unwrap();
        let text = doc.to_yaml_string().unwrap();
        let back = AgroManagement::from_yaml_str(&text).unwrap();
        assert_eq!(back, doc);
    }
}
