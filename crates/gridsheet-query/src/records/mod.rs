//! Filtering and priority ordering of JSON records.
//!
//! Records that satisfy every [`Filter`] come first, ordered by their
//! `priority` field; the rest follow in their original order.

mod filter;
mod sort;

pub use filter::{CompareOp, Filter, compare};
pub use sort::SortOrder;

use crate::error::Result;
use gridsheet_core::Scalar;
use serde_json::Value;

/// A JSON object. Key order follows the input.
pub type Record = serde_json::Map<String, Value>;

/// Field consulted by [`process_items`] when ordering matches.
pub const PRIORITY_FIELD: &str = "priority";

/// Convert a JSON value into a cell scalar for comparison.
/// Arrays and objects compare by their JSON text.
pub fn value_to_scalar(value: &Value) -> Scalar {
    match value {
        Value::Null => Scalar::Null,
        Value::Bool(b) => Scalar::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Scalar::Int(i),
            None => n.as_f64().map_or(Scalar::Null, Scalar::Float),
        },
        Value::String(s) => Scalar::Text(s.clone()),
        other => Scalar::Text(other.to_string()),
    }
}

/// Look up a field, treating a missing key as null.
pub(crate) fn field_scalar(record: &Record, field: &str) -> Scalar {
    record.get(field).map_or(Scalar::Null, value_to_scalar)
}

/// Whether the record satisfies every filter.
pub fn matches_filters(record: &Record, filters: &[Filter]) -> bool {
    filters.iter().all(|f| f.matches(record))
}

/// Move matching records to the front, sorted by priority; keep the rest in input order.
pub fn process_items(items: Vec<Record>, filters: &[Filter], order: SortOrder) -> Vec<Record> {
    let (mut matched, rest): (Vec<Record>, Vec<Record>) = items
        .into_iter()
        .partition(|item| matches_filters(item, filters));
    tracing::debug!(
        matched = matched.len(),
        rest = rest.len(),
        ?order,
        "partitioned records"
    );

    sort::sort_by_priority(&mut matched, order);
    matched.extend(rest);
    matched
}

/// Parse a JSON array of objects.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json)?)
}

/// Pretty-print records as a JSON array (two-space indent).
pub fn records_to_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
