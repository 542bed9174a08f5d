//! Error types for the grid store.

use thiserror::Error;

/// Errors raised by [`Grid`](crate::Grid) operations.
///
/// Presence conflicts (inserting over a value, updating an empty cell) are
/// not errors; those operations report them by returning `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimension: {name} = {value}")]
    InvalidDimension { name: &'static str, value: usize },

    #[error("Position ({row}, {col}) out of range (grid is {rows}x{cols})")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
