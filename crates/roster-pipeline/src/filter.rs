use tracing::debug;

use roster_model::{FieldRef, Query, Record};

use crate::format::DisplayFormatter;
use crate::normalize::search_text;

/// Keep records whose search text for any of `fields` contains `query`.
///
/// A blank query keeps every record in its original order. No match yields
/// an empty vector.
pub fn filter<'a, I>(
    records: I,
    query: &Query,
    fields: &[FieldRef],
    formatter: &dyn DisplayFormatter,
) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if query.is_blank() {
        return records.into_iter().collect();
    }
    let mut scanned = 0usize;
    let kept: Vec<&Record> = records
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter(|record| {
            fields
                .iter()
                .any(|field| query.matches(&search_text(record, field, formatter)))
        })
        .collect();
    debug!(scanned, kept = kept.len(), field_count = fields.len(), "filter applied");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::StandardFormatter;

    fn people() -> Vec<Record> {
        vec![
            Record::new().with("name", "Bob").with("status", "absent"),
            Record::new().with("name", "Amy").with("status", "present"),
            Record::new().with("name", "amy").with("status", "present"),
        ]
    }

    #[test]
    fn blank_query_is_identity() {
        let records = people();
        let kept = filter(&records, &Query::new("  "), &[FieldRef::text("name")], &StandardFormatter::default());
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let records = people();
        let fields = [FieldRef::text("name"), FieldRef::text("status")];
        let formatter = StandardFormatter::default();

        let kept = filter(&records, &Query::new("AMY"), &fields, &formatter);
        assert_eq!(kept.len(), 2);

        let kept = filter(&records, &Query::new("sent"), &fields, &formatter);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn no_match_is_empty() {
        let records = people();
        let kept = filter(&records, &Query::new("zed"), &[FieldRef::text("name")], &StandardFormatter::default());
        assert!(kept.is_empty());
    }

    #[test]
    fn missing_fields_never_match() {
        let records = people();
        let kept = filter(
            &records,
            &Query::new("pune"),
            &[FieldRef::text("location.name")],
            &StandardFormatter::default(),
        );
        assert!(kept.is_empty());
    }
}
