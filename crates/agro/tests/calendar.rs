//! Integration test: specialising crop calendar templates from disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use phenoprep_agro::{AgroError, CampaignDates, Value, configure, get_agromanager};

const WHEAT_TEMPLATE: &str = "\
Version: 1.0
AgroManagement:
- 1900-01-01:
    CropCalendar:
      crop_name: wheat
      variety_name: X
      crop_start_date: 1900-01-01
      crop_start_type: sowing
      crop_end_date: 1900-12-31
      crop_end_type: maturity
      max_duration: 365
    TimedEvents: null
    StateEvents: null
- 1901-01-01: null
";

/// Helper: write `content` to `name` inside a fresh temp dir.
fn write_template(content: &str, name: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).expect("create template");
    f.write_all(content.as_bytes()).expect("write template");
    (dir, path)
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

#[test]
fn sowing_date_replaces_placeholder_key_and_crop_start() {
    let (_dir, path) = write_template(WHEAT_TEMPLATE, "wheat_calendar.yaml");

    let agro = get_agromanager(ymd(2022, 10, 15), &path).unwrap();

    let first = agro.as_value()["AgroManagement"][0].as_mapping().unwrap();
    assert_eq!(first.len(), 1);
    let (key, body) = first.iter().next().unwrap();
    assert_eq!(key, &string("2022-10-15"));

    let calendar = &body["CropCalendar"];
    assert_eq!(calendar["crop_start_date"], string("2022-10-15"));
    assert_eq!(calendar["crop_end_date"], string("1900-12-31"));
    assert_eq!(calendar["variety_name"], string("X"));
    assert_eq!(calendar["crop_name"], string("wheat"));
    assert_eq!(calendar["max_duration"], Value::from(365));
    assert!(body["TimedEvents"].is_null());

    assert_eq!(agro.campaign_date().unwrap(), ymd(2022, 10, 15));
    assert_eq!(agro.crop_start_date().unwrap(), ymd(2022, 10, 15));
}

#[test]
fn content_outside_first_campaign_passes_through() {
    let (_dir, path) = write_template(WHEAT_TEMPLATE, "wheat_calendar.yaml");

    let agro = get_agromanager(ymd(2022, 10, 15), &path).unwrap();
    let doc = agro.as_value();

    assert_eq!(doc["Version"], Value::from(1.0));
    assert_eq!(agro.campaigns().unwrap(), 2);
    let trailing = doc["AgroManagement"][1].as_mapping().unwrap();
    assert!(trailing.get("1901-01-01").unwrap().is_null());
}

#[test]
fn same_template_same_date_is_deterministic() {
    let (_dir, path) = write_template(WHEAT_TEMPLATE, "wheat_calendar.yaml");

    let a = get_agromanager(ymd(2023, 3, 1), &path).unwrap();
    let b = get_agromanager(ymd(2023, 3, 1), &path).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_yaml_string().unwrap(), b.to_yaml_string().unwrap());
}

#[test]
fn template_file_is_not_modified() {
    let (_dir, path) = write_template(WHEAT_TEMPLATE, "wheat_calendar.yaml");

    get_agromanager(ymd(2022, 10, 15), &path).unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, WHEAT_TEMPLATE);
}

#[test]
fn many_sowing_dates() {
    let (_dir, path) = write_template(WHEAT_TEMPLATE, "wheat_calendar.yaml");

    for sowing in [ymd(1999, 9, 30), ymd(2020, 2, 29), ymd(2024, 12, 31)] {
        let agro = get_agromanager(sowing, &path).unwrap();
        assert_eq!(agro.campaign_date().unwrap(), sowing);
        assert_eq!(agro.crop_start_date().unwrap(), sowing);
    }
}

#[test]
fn separate_campaign_and_crop_start() {
    let (_dir, path) = write_template(WHEAT_TEMPLATE, "wheat_calendar.yaml");
    let dates = CampaignDates::new(ymd(2022, 10, 1), ymd(2022, 10, 15)).unwrap();

    let agro = configure(&path, dates).unwrap();
    assert_eq!(agro.campaign_date().unwrap(), ymd(2022, 10, 1));
    assert_eq!(agro.crop_start_date().unwrap(), ymd(2022, 10, 15));
}

#[test]
fn nonexistent_template_is_not_found() {
    let path = Path::new("/tmp/phenoprep_test_nonexistent_calendar.yaml");

    let err = get_agromanager(ymd(2022, 10, 15), path).unwrap_err();
    assert!(
        matches!(err, AgroError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn directory_path_is_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let err = get_agromanager(ymd(2022, 10, 15), dir.path()).unwrap_err();
    assert!(
        matches!(err, AgroError::Io { .. }),
        "expected Io, got {err:?}"
    );
}

#[test]
fn malformed_yaml_is_parse_error() {
    let (_dir, path) = write_template("AgroManagement:\n- 1900-01-01: {CropCalendar: [\n", "broken.yaml");

    let err = get_agromanager(ymd(2022, 10, 15), &path).unwrap_err();
    assert!(
        matches!(err, AgroError::Parse { .. }),
        "expected Parse, got {err:?}"
    );
}

#[test]
fn template_without_agro_management() {
    let (_dir, path) = write_template("Version: 1.0\n", "empty_calendar.yaml");

    let err = get_agromanager(ymd(2022, 10, 15), &path).unwrap_err();
    assert_eq!(
        err,
        AgroError::MissingField {
            field: "AgroManagement".to_string()
        }
    );
}

#[test]
fn template_without_crop_calendar() {
    let (_dir, path) = write_template(
        "AgroManagement:\n- 1900-01-01:\n    TimedEvents: null\n",
        "fallow.yaml",
    );

    let err = get_agromanager(ymd(2022, 10, 15), &path).unwrap_err();
    assert!(
        matches!(err, AgroError::MissingField { ref field } if field.ends_with("CropCalendar")),
        "expected MissingField for CropCalendar, got {err:?}",
    );
}
