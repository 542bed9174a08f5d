use crate::error::{GridError, Result};
use crate::scalar::Scalar;

/// Render width used when none is given.
pub const DEFAULT_CELL_WIDTH: usize = 10;

/// Fixed-size, dense grid of cells addressed 1-based from the outside.
///
/// Dimensions never change after construction. Every public operation
/// validates its coordinates through [`Grid::index`] before touching
/// storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cell_width: usize,
    /// Row-major cells, `rows * cols` long
    pub(crate) cells: Vec<Scalar>,
}

impl Grid {
    /// Create an empty grid with the default cell width.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::with_cell_width(rows, cols, DEFAULT_CELL_WIDTH)
    }

    /// Create an empty grid rendering each field `cell_width` characters wide.
    pub fn with_cell_width(rows: usize, cols: usize, cell_width: usize) -> Result<Self> {
        for (name, value) in [("rows", rows), ("cols", cols), ("cell_width", cell_width)] {
            if value == 0 {
                return Err(GridError::InvalidDimension { name, value });
            }
        }
        let too_large = GridError::InvalidDimension {
            name: "rows * cols",
            value: usize::MAX,
        };
        let len = rows.checked_mul(cols).ok_or_else(|| too_large.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, Scalar::Null);

        tracing::debug!(rows, cols, cell_width, "created grid");
        Ok(Grid {
            rows,
            cols,
            cell_width,
            cells,
        })
    }

    /// Build a grid from rows of values, sized to the longest row.
    ///
    /// Cells are written with [`Grid::set`], so blank text is stored as given
    /// and still counts as absent. Short rows leave their tail cells `Null`.
    pub fn from_rows<R, V, S>(rows: R, cell_width: usize) -> Result<Self>
    where
        R: IntoIterator<Item = V>,
        V: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let data: Vec<Vec<Scalar>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let cols = data.iter().map(Vec::len).max().unwrap_or(0);

        let mut grid = Self::with_cell_width(data.len(), cols, cell_width)?;
        for (r, row) in data.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                grid.set(r + 1, c + 1, value)?;
            }
        }
        tracing::debug!(
            rows = grid.rows,
            cols = grid.cols,
            present = grid.present_count(),
            "bulk loaded grid"
        );
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Validate a 1-based position and translate it to a storage index.
    pub(crate) fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < 1 || row > self.rows || col < 1 || col > self.cols {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((row - 1) * self.cols + (col - 1))
    }
}
