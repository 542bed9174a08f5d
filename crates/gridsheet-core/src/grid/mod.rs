//! Grid store (state, cell operations, rendering).

mod ops;
mod render;
mod state;

pub use state::{DEFAULT_CELL_WIDTH, Grid};
