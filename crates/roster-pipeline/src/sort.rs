use tracing::debug;

use roster_model::{FieldKind, FieldRef, Record, SortDirection, SortSpec};

use crate::normalize::{ComparableValue, normalize};

/// Stable sort of `records` by `spec`.
///
/// Descending order negates the comparator, so records with equal keys keep
/// their input order in both directions. `None` returns the input as is.
/// The field kind is looked up in `fields`; unknown fields sort as text.
pub fn sort<'a>(
    records: Vec<&'a Record>,
    spec: Option<&SortSpec>,
    fields: &[FieldRef],
) -> Vec<&'a Record> {
    let Some(spec) = spec else {
        return records;
    };
    let key_field = FieldRef::new(
        spec.field.clone(),
        FieldKind::declared_for(fields, &spec.field),
    );

    let mut keyed: Vec<(ComparableValue, &Record)> = records
        .into_iter()
        .map(|record| (normalize(record, &key_field), record))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| {
        let ordering = left.cmp(right);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    debug!(
        field = %spec.field,
        direction = ?spec.direction,
        count = keyed.len(),
        "records sorted"
    );
    keyed.into_iter().map(|(_, record)| record).collect()
}
