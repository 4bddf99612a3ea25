//! File-backed sources over temporary data directories.

use std::fs;

use roster_ingest::{
    CsvFileSource, DataLocation, FetchError, FetchRequest, JsonFileSource, RecordSource,
};
use roster_model::FieldValue;
use tempfile::TempDir;

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("attendance.json"),
        r#"{"data": [
            {"date": "2024-03-05", "status": "present", "employee": {"name": "Amy"}},
            {"date": "2024-03-06", "status": "absent", "employee": {"name": "Bob"}}
        ]}"#,
    )
    .expect("write json");
    fs::write(
        dir.path().join("locations.csv"),
        "name,address\nPune,\"12 MG Road, Pune\"\nNashik,\n",
    )
    .expect("write csv");
    dir
}

#[test]
fn json_source_reads_envelope() {
    let dir = data_dir();
    let records = JsonFileSource::new(dir.path())
        .fetch(&FetchRequest::new("attendance"))
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[1].resolve("employee.name"),
        Some(&FieldValue::Text("Bob".into()))
    );
}

#[test]
fn csv_source_reads_text_cells() {
    let dir = data_dir();
    let records = CsvFileSource::new(dir.path())
        .fetch(&FetchRequest::new("locations"))
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].get("address"),
        Some(&FieldValue::Text("12 MG Road, Pune".into()))
    );
    assert!(records[1].get("address").is_some_and(FieldValue::is_missing));
}

#[test]
fn data_location_prefers_json_then_csv() {
    let dir = data_dir();
    let location = DataLocation::new(dir.path());
    assert_eq!(
        location.fetch(&FetchRequest::new("attendance")).unwrap().len(),
        2
    );
    assert_eq!(
        location.fetch(&FetchRequest::new("locations")).unwrap().len(),
        2
    );
}

#[test]
fn data_location_file_serves_any_report() {
    let dir = data_dir();
    let location = DataLocation::new(dir.path().join("attendance.json"));
    let records = location.fetch(&FetchRequest::new("salary")).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn missing_report_is_a_fetch_error() {
    let dir = data_dir();
    let error = DataLocation::new(dir.path())
        .fetch(&FetchRequest::new("salary"))
        .unwrap_err();
    assert!(matches!(error, FetchError::SourceNotFound { .. }));
    assert_eq!(
        error.user_message(),
        "No data is available for the salary report."
    );
}

#[test]
fn malformed_json_reports_a_readable_message() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("salary.json"), "{ not json").unwrap();
    let error = JsonFileSource::new(dir.path())
        .fetch(&FetchRequest::new("salary"))
        .unwrap_err();
    assert!(matches!(error, FetchError::Json { .. }));
    assert!(!error.user_message().contains("salary.json"));
}
