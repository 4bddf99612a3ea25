//! Tests for roster-model types.

use chrono::NaiveDate;
use roster_model::{
    ColumnSpec, DateRange, FieldKind, FieldRef, FieldValue, Page, Query, Record, RecordScope,
    ReportLayout, RosterError, SortDirection, SortSpec,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn record_deserializes_nested_json() {
    let json = r#"{
        "date": "2024-03-01",
        "status": "present",
        "hours": 8,
        "employee": { "name": "Amy", "code": "E-17" },
        "shifts": [{ "start": "09:00" }, { "start": "14:00" }],
        "remarks": null
    }"#;
    let record: Record = serde_json::from_str(json).expect("parse record");

    assert_eq!(record.resolve("employee.name"), Some(&FieldValue::Text("Amy".into())));
    assert_eq!(record.resolve("shifts.1.start"), Some(&FieldValue::Text("14:00".into())));
    assert_eq!(record.resolve("hours"), Some(&FieldValue::Number(8.0)));
    assert_eq!(record.resolve("remarks"), Some(&FieldValue::Null));
}

#[test]
fn record_missing_paths_resolve_to_none() {
    let record = Record::new().with("employee", "not an object");

    assert!(record.resolve("employee.name").is_none());
    assert!(record.resolve("location.name").is_none());
    assert!(record.resolve("").is_none());
}

#[test]
fn literal_dotted_key_wins() {
    let record = Record::new().with("employee.name", "Flat");
    assert_eq!(record.resolve("employee.name"), Some(&FieldValue::Text("Flat".into())));
}

#[test]
fn field_value_numeric_coercion() {
    assert_eq!(FieldValue::Text(" 12.5 ".into()).as_f64(), Some(12.5));
    assert_eq!(FieldValue::Text("n/a".into()).as_f64(), None);
    assert!(FieldValue::Text("   ".into()).is_missing());
    assert!(!FieldValue::Number(0.0).is_missing());
}

#[test]
fn query_is_trimmed_and_lowercased() {
    let query = Query::new("  AmY ");
    assert_eq!(query.as_str(), "amy");
    assert!(query.matches("amy pond"));
    assert!(Query::new("   ").is_blank());
}

#[test]
fn page_rejects_zero_index_and_size() {
    assert!(matches!(
        Page::new(0, 10),
        Err(RosterError::InvalidPage { index: 0, size: 10 })
    ));
    assert!(Page::new(1, 0).is_err());
    let page = Page::new(3, 10).unwrap();
    assert_eq!(page.offset(), 20);
    assert_eq!(Page::first(0).size(), 1);
}

#[test]
fn sort_toggle_flips_active_field_only() {
    let current = SortSpec::asc("name");
    let flipped = SortSpec::toggled(Some(&current), "name");
    assert_eq!(flipped.direction, SortDirection::Desc);

    let other = SortSpec::toggled(Some(&flipped), "date");
    assert_eq!(other, SortSpec::asc("date"));
    assert_eq!(SortSpec::toggled(None, "date"), SortSpec::asc("date"));
}

#[test]
fn date_range_validates_order() {
    assert!(DateRange::new(date(2024, 3, 2), date(2024, 3, 1)).is_err());
    let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
    assert!(range.contains(date(2024, 3, 31)));
    assert!(!range.contains(date(2024, 4, 1)));
}

#[test]
fn month_of_covers_whole_month() {
    let range = DateRange::month_of(date(2024, 2, 17));
    assert_eq!(range.start(), date(2024, 2, 1));
    assert_eq!(range.end(), date(2024, 2, 29));
}

#[test]
fn scope_describes_active_filters() {
    let scope = RecordScope::default()
        .with_date_range(DateRange::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap())
        .with_location("  Pune Site ");
    assert_eq!(
        scope.describe(),
        vec![
            "Date range: 2024-03-01 to 2024-03-31".to_string(),
            "Location: Pune Site".to_string(),
        ]
    );
    assert!(RecordScope::default().with_location("  ").is_unrestricted());
}

#[test]
fn layout_kind_lookup_and_sort_field() {
    let layout = ReportLayout::new("salary", "Salary")
        .column(ColumnSpec::new("Employee", FieldRef::text("employee.name")))
        .column(ColumnSpec::new("Net Pay", FieldRef::currency("netPay")))
        .dated_by(FieldRef::date("month"));

    assert_eq!(layout.kind_of("netPay"), FieldKind::Currency);
    assert_eq!(layout.kind_of("month"), FieldKind::Date);
    assert_eq!(layout.kind_of("unknown"), FieldKind::Text);
    assert_eq!(layout.sort_field("net pay"), Some("netPay".to_string()));
    assert_eq!(layout.sort_field("EMPLOYEE.NAME"), Some("employee.name".to_string()));
    assert_eq!(layout.sort_field("missing"), None);
}

#[test]
fn declared_kind_defaults_to_text() {
    let fields = [FieldRef::number("hours"), FieldRef::date("date")];
    assert_eq!(FieldKind::declared_for(&fields, "hours"), FieldKind::Number);
    assert_eq!(FieldKind::declared_for(&fields, "date"), FieldKind::Date);
    assert_eq!(FieldKind::declared_for(&fields, "status"), FieldKind::Text);
    assert_eq!(FieldKind::declared_for(&[], "hours"), FieldKind::Text);
}
