use super::filter::text_key;
use super::{PRIORITY_FIELD, Record, field_scalar};
use gridsheet_core::Scalar;

/// Direction of the priority ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// `asc`/`desc` in any case; anything else sorts ascending.
    pub fn from_label(label: &str) -> SortOrder {
        if label.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Priority of a record; a missing field counts as 0.
fn priority_of(record: &Record) -> Scalar {
    if record.contains_key(PRIORITY_FIELD) {
        field_scalar(record, PRIORITY_FIELD)
    } else {
        Scalar::Int(0)
    }
}

/// Whether `before` must move past `current` to respect `order`.
fn out_of_order(before: &Scalar, current: &Scalar, order: SortOrder) -> bool {
    let ascending = order == SortOrder::Ascending;
    match (before.as_number(), current.as_number()) {
        (Some(b), Some(c)) => {
            if ascending { b > c } else { b < c }
        }
        _ => {
            let (b, c) = (text_key(before), text_key(current));
            if ascending { b > c } else { b < c }
        }
    }
}

/// Stable insertion sort by priority.
///
/// Priorities may mix numbers and text, which is not a total order, so
/// this only ever swaps neighbours that are strictly out of order.
pub(super) fn sort_by_priority(items: &mut Vec<Record>, order: SortOrder) {
    let mut keyed: Vec<(Scalar, Record)> = items
        .drain(..)
        .map(|record| (priority_of(&record), record))
        .collect();

    for i in 1..keyed.len() {
        let mut j = i;
        while j > 0 && out_of_order(&keyed[j - 1].0, &keyed[j].0, order) {
            keyed.swap(j - 1, j);
            j -= 1;
        }
    }

    items.extend(keyed.into_iter().map(|(_, record)| record));
}
