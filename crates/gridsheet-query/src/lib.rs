//! gridsheet_query - text search and record filtering on top of gridsheet-core values.

pub mod error;
pub mod records;
pub mod search;

pub use error::{QueryError, Result};
pub use records::{
    CompareOp, Filter, Record, SortOrder, compare, matches_filters, parse_records, process_items,
    records_to_json,
};
pub use search::{SearchOptions, count_occurrences};
