//! Property tests for the filter, sort, and paginate stages.

use proptest::prelude::*;

use roster_model::{FieldRef, Page, Query, Record, SortSpec};
use roster_pipeline::{StandardFormatter, filter, page_count, paginate, sort};

fn build_records(rows: &[(String, String, i32)]) -> Vec<Record> {
    rows.iter()
        .enumerate()
        .map(|(idx, (name, status, rank))| {
            Record::new()
                .with("id", idx as i64)
                .with("name", name.as_str())
                .with("status", status.as_str())
                .with("rank", *rank)
        })
        .collect()
}

fn rows_strategy() -> impl Strategy<Value = Vec<(String, String, i32)>> {
    prop::collection::vec(("[a-zA-Z ]{0,6}", "[a-zA-Z]{0,5}", 0..4i32), 0..40)
}

fn id(record: &Record) -> i64 {
    record.get("id").and_then(|v| v.as_f64()).unwrap_or(-1.0) as i64
}

fn rank(record: &Record) -> f64 {
    record.get("rank").and_then(|v| v.as_f64()).unwrap_or(0.0)
}

fn text(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_lowercase()
}

proptest! {
    #[test]
    fn blank_query_is_identity(rows in rows_strategy(), blank in "[ \t]{0,3}") {
        let records = build_records(&rows);
        let fields = [FieldRef::text("name"), FieldRef::text("status")];
        let kept = filter(&records, &Query::new(&blank), &fields, &StandardFormatter::default());
        prop_assert_eq!(kept.len(), records.len());
        for (kept, original) in kept.iter().zip(&records) {
            prop_assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn filter_is_sound_and_complete(rows in rows_strategy(), needle in "[a-zA-Z]{1,2}") {
        let records = build_records(&rows);
        let fields = [FieldRef::text("name"), FieldRef::text("status")];
        let kept = filter(&records, &Query::new(&needle), &fields, &StandardFormatter::default());

        let needle = needle.to_lowercase();
        let expected: Vec<i64> = records
            .iter()
            .filter(|r| text(r, "name").contains(&needle) || text(r, "status").contains(&needle))
            .map(id)
            .collect();
        let actual: Vec<i64> = kept.iter().map(|r| id(r)).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn sort_is_stable_in_both_directions(rows in rows_strategy()) {
        let records = build_records(&rows);
        let fields = [FieldRef::number("rank")];

        let asc = sort(records.iter().collect(), Some(&SortSpec::asc("rank")), &fields);
        for pair in asc.windows(2) {
            prop_assert!(rank(pair[0]) <= rank(pair[1]));
            if rank(pair[0]) == rank(pair[1]) {
                prop_assert!(id(pair[0]) < id(pair[1]));
            }
        }

        let desc = sort(records.iter().collect(), Some(&SortSpec::desc("rank")), &fields);
        for pair in desc.windows(2) {
            prop_assert!(rank(pair[0]) >= rank(pair[1]));
            if rank(pair[0]) == rank(pair[1]) {
                prop_assert!(id(pair[0]) < id(pair[1]));
            }
        }

        let again = sort(asc.clone(), Some(&SortSpec::asc("rank")), &fields);
        prop_assert_eq!(
            again.iter().map(|r| id(r)).collect::<Vec<_>>(),
            asc.iter().map(|r| id(r)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn pages_cover_the_sequence(len in 0usize..120, size in 1usize..15) {
        let items: Vec<usize> = (0..len).collect();
        let pages = page_count(len, size);
        let mut rebuilt = Vec::new();
        for index in 1..=pages {
            let page = Page::new(index, size).unwrap();
            let slice = paginate(&items, page);
            prop_assert!(slice.len() <= size);
            if index < pages {
                prop_assert_eq!(slice.len(), size);
            }
            rebuilt.extend_from_slice(slice);
        }
        prop_assert_eq!(rebuilt, items);
        prop_assert!(paginate(&(0..len).collect::<Vec<_>>(), Page::new(pages + 1, size).unwrap()).is_empty());
    }
}
