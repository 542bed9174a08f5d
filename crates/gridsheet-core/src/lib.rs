//! gridsheet-core - in-memory grid store.
//!
//! - [`Grid`] - fixed-size, bounds-checked cell storage with presence-aware
//!   insert/update, row/column sums and fixed-width rendering
//! - [`Scalar`] - the value held by a cell
//! - [`Coord`] - 1-based cell coordinates (A1 or `row,col` notation)

pub mod coord;
pub mod error;
pub mod grid;
pub mod scalar;

pub use coord::Coord;
pub use error::{GridError, Result};
pub use grid::{DEFAULT_CELL_WIDTH, Grid};
pub use scalar::{Scalar, format_float, is_blank_text, try_parse_number};
