//! End-to-end pipeline scenarios.

use roster_model::{FieldRef, Page, Query, Record, SortSpec};
use roster_pipeline::{StandardFormatter, filter, page_count, paginate, sort};

fn name(record: &Record) -> &str {
    record.get("name").and_then(|v| v.as_str()).unwrap_or("")
}

#[test]
fn case_insensitive_match_keeps_tie_order() {
    let records = vec![
        Record::new().with("name", "Bob").with("status", "absent"),
        Record::new().with("name", "Amy").with("status", "present"),
        Record::new().with("name", "amy").with("status", "present"),
    ];
    let fields = [FieldRef::text("name")];

    let filtered = filter(&records, &Query::new("amy"), &fields, &StandardFormatter::default());
    let sorted = sort(filtered, Some(&SortSpec::asc("name")), &fields);
    let names: Vec<&str> = sorted.iter().map(|r| name(r)).collect();
    assert_eq!(names, vec!["Amy", "amy"]);

    let sorted_desc = sort(
        filter(&records, &Query::new("amy"), &fields, &StandardFormatter::default()),
        Some(&SortSpec::desc("name")),
        &fields,
    );
    let names: Vec<&str> = sorted_desc.iter().map(|r| name(r)).collect();
    assert_eq!(names, vec!["Amy", "amy"]);
}

#[test]
fn empty_sequence_has_one_empty_page() {
    let records: Vec<Record> = Vec::new();
    assert_eq!(page_count(0, 10), 1);
    assert!(paginate(&records, Page::new(1, 10).unwrap()).is_empty());
}

#[test]
fn nested_employee_names_sort_with_missing_first() {
    let records: Vec<Record> = serde_json::from_str(
        r#"[
            {"employee": {"name": "zoe"}},
            {"employee": null},
            {"employee": {"name": "Adam"}}
        ]"#,
    )
    .unwrap();
    let fields = [FieldRef::text("employee.name")];
    let sorted = sort(records.iter().collect(), Some(&SortSpec::asc("employee.name")), &fields);
    let order: Vec<Option<&str>> = sorted
        .iter()
        .map(|r| r.resolve("employee.name").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(order, vec![None, Some("Adam"), Some("zoe")]);
}
