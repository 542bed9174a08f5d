use super::Grid;
use crate::error::Result;
use crate::scalar::{Scalar, try_parse_number};

impl Grid {
    /// Whether the cell holds a present (non-null, non-blank) value.
    pub fn has_value(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].is_present())
    }

    /// Read a single cell.
    pub fn get(&self, row: usize, col: usize) -> Result<&Scalar> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Store `value` in an absent cell.
    ///
    /// Returns `Ok(false)` without touching the grid if the cell already has
    /// a value. Storing blank text succeeds but leaves the cell absent.
    pub fn insert(&mut self, row: usize, col: usize, value: impl Into<Scalar>) -> Result<bool> {
        let idx = self.index(row, col)?;
        if self.cells[idx].is_present() {
            tracing::debug!(row, col, "insert rejected: cell already has a value");
            return Ok(false);
        }
        self.cells[idx] = value.into();
        Ok(true)
    }

    /// Overwrite a present cell.
    ///
    /// Returns `Ok(false)` without touching the grid if the cell is absent.
    pub fn update(&mut self, row: usize, col: usize, value: impl Into<Scalar>) -> Result<bool> {
        let idx = self.index(row, col)?;
        if self.cells[idx].is_absent() {
            tracing::debug!(row, col, "update rejected: cell is empty");
            return Ok(false);
        }
        self.cells[idx] = value.into();
        Ok(true)
    }

    /// Overwrite a cell regardless of its presence state.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<Scalar>) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value.into();
        tracing::trace!(row, col, "set cell");
        Ok(())
    }

    /// Values of one row, left to right.
    pub fn get_row(&self, row: usize) -> Result<&[Scalar]> {
        let start = self.index(row, 1)?;
        Ok(&self.cells[start..start + self.cols()])
    }

    /// Values of one column, top to bottom.
    pub fn get_col(&self, col: usize) -> Result<Vec<&Scalar>> {
        let start = self.index(1, col)?;
        Ok(self.cells[start..].iter().step_by(self.cols()).collect())
    }

    /// Sum of the row's numeric values; anything that does not coerce is skipped.
    pub fn sum_row(&self, row: usize) -> Result<f64> {
        Ok(sum_values(self.get_row(row)?.iter()))
    }

    /// Sum of the column's numeric values; anything that does not coerce is skipped.
    pub fn sum_col(&self, col: usize) -> Result<f64> {
        Ok(sum_values(self.get_col(col)?.into_iter()))
    }

    /// Number of cells currently holding a present value.
    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_present()).count()
    }
}

fn sum_values<'a>(values: impl Iterator<Item = &'a Scalar>) -> f64 {
    values.filter_map(try_parse_number).sum()
}
