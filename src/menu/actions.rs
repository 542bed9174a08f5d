use super::Session;
use crate::error::Result;
use gridsheet_core::{Scalar, format_float};
use std::io::{BufRead, Write};

/// Entries of the main menu, keyed by the number the user types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Update,
    Check,
    Preview,
    SumRow,
    SumCol,
    Quit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<MenuChoice> {
        match n {
            1 => Some(MenuChoice::Insert),
            2 => Some(MenuChoice::Update),
            3 => Some(MenuChoice::Check),
            4 => Some(MenuChoice::Preview),
            5 => Some(MenuChoice::SumRow),
            6 => Some(MenuChoice::SumCol),
            0 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Result of applying a menu choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Element listing for sums; never-written cells show as `-`.
fn format_elements<'a>(values: impl Iterator<Item = &'a Scalar>) -> String {
    values
        .map(|v| if v.is_null() { "-".to_string() } else { v.to_string() })
        .collect::<Vec<_>>()
        .join(" ")
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Apply one menu choice. Running out of input ends the session.
    pub fn apply(&mut self, choice: MenuChoice) -> Result<ApplyResult> {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());

        match choice {
            MenuChoice::Insert => {
                writeln!(self.io.output, "\n-- Insert --")?;
                let Some(cell) = self.io.read_cell(rows, cols)? else {
                    return Ok(ApplyResult::Quit);
                };
                let Some(value) = self.io.read_line("Value to insert: ")? else {
                    return Ok(ApplyResult::Quit);
                };
                if self.grid.insert(cell.row, cell.col, value)? {
                    writeln!(self.io.output, "Inserted at ({}, {}).", cell.row, cell.col)?;
                } else {
                    writeln!(
                        self.io.output,
                        "Could not insert: the cell already has information."
                    )?;
                }
            }
            MenuChoice::Update => {
                writeln!(self.io.output, "\n-- Update --")?;
                let Some(cell) = self.io.read_cell(rows, cols)? else {
                    return Ok(ApplyResult::Quit);
                };
                let Some(value) = self.io.read_line("New value: ")? else {
                    return Ok(ApplyResult::Quit);
                };
                if self.grid.update(cell.row, cell.col, value)? {
                    writeln!(self.io.output, "Updated ({}, {}).", cell.row, cell.col)?;
                } else {
                    writeln!(self.io.output, "Could not update: the cell is empty.")?;
                }
            }
            MenuChoice::Check => {
                writeln!(self.io.output, "\n-- Check cell --")?;
                let Some(cell) = self.io.read_cell(rows, cols)? else {
                    return Ok(ApplyResult::Quit);
                };
                let state = if self.grid.has_value(cell.row, cell.col)? {
                    "HAS information"
                } else {
                    "is EMPTY"
                };
                writeln!(self.io.output, "Cell ({}, {}) {}.", cell.row, cell.col, state)?;
            }
            MenuChoice::Preview => {
                writeln!(self.io.output, "\n-- Preview --")?;
                writeln!(self.io.output, "{}", self.grid.render())?;
            }
            MenuChoice::SumRow => {
                writeln!(self.io.output, "\n-- Sum row --")?;
                let Some(row) = self.io.read_int(&format!("Row (1..{}): ", rows))? else {
                    return Ok(ApplyResult::Quit);
                };
                match usize::try_from(row) {
                    Ok(row) if (1..=rows).contains(&row) => {
                        let elements = format_elements(self.grid.get_row(row)?.iter());
                        writeln!(self.io.output, "Row {} elements: {}", row, elements)?;
                        let total = self.grid.sum_row(row)?;
                        writeln!(self.io.output, "Row {} sum = {}", row, format_float(total))?;
                    }
                    _ => writeln!(self.io.output, "Row out of range.")?,
                }
            }
            MenuChoice::SumCol => {
                writeln!(self.io.output, "\n-- Sum column --")?;
                let Some(col) = self.io.read_int(&format!("Column (1..{}): ", cols))? else {
                    return Ok(ApplyResult::Quit);
                };
                match usize::try_from(col) {
                    Ok(col) if (1..=cols).contains(&col) => {
                        let elements = format_elements(self.grid.get_col(col)?.into_iter());
                        writeln!(self.io.output, "Column {} elements: {}", col, elements)?;
                        let total = self.grid.sum_col(col)?;
                        writeln!(self.io.output, "Column {} sum = {}", col, format_float(total))?;
                    }
                    _ => writeln!(self.io.output, "Column out of range.")?,
                }
            }
            MenuChoice::Quit => {
                writeln!(self.io.output, "Goodbye!")?;
                return Ok(ApplyResult::Quit);
            }
        }
        Ok(ApplyResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::prompt::Prompter;
    use gridsheet_core::Grid;
    use std::io::Cursor;

    fn session(grid: Grid, input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session {
            io: Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()),
            grid,
        }
    }

    fn output(s: &Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&s.io.output).to_string()
    }

    #[test]
    fn test_from_number() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Insert));
        assert_eq!(MenuChoice::from_number(6), Some(MenuChoice::SumCol));
        assert_eq!(MenuChoice::from_number(0), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::from_number(7), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn test_insert_stores_raw_text() {
        let mut s = session(Grid::new(2, 2).unwrap(), "2,2\n  padded \n");
        assert_eq!(s.apply(MenuChoice::Insert).unwrap(), ApplyResult::Continue);
        assert_eq!(s.grid.get(2, 2).unwrap(), &"  padded ");
    }

    #[test]
    fn test_blank_insert_reports_success_but_stays_empty() {
        let mut s = session(Grid::new(1, 1).unwrap(), "1\n1\n   \n1\n1\n");
        s.apply(MenuChoice::Insert).unwrap();
        s.apply(MenuChoice::Check).unwrap();
        let out = output(&s);
        assert!(out.contains("Inserted at (1, 1)."));
        assert!(out.contains("Cell (1, 1) is EMPTY."));
    }

    #[test]
    fn test_sum_listing_marks_unset_cells() {
        let grid = Grid::from_rows(
            vec![
                vec![Scalar::from("3"), Scalar::from("abc")],
                vec![Scalar::Int(2)],
            ],
            10,
        )
        .unwrap();

        let mut s = session(grid, "1\n2\n");
        s.apply(MenuChoice::SumRow).unwrap();
        s.apply(MenuChoice::SumCol).unwrap();
        let out = output(&s);
        assert!(out.contains("Row 1 elements: 3 abc"));
        assert!(out.contains("Row 1 sum = 3.0"));
        assert!(out.contains("Column 2 elements: abc -"));
        assert!(out.contains("Column 2 sum = 0.0"));
    }

    #[test]
    fn test_eof_mid_action_quits() {
        let mut s = session(Grid::new(1, 1).unwrap(), "1\n1\n");
        assert_eq!(s.apply(MenuChoice::Insert).unwrap(), ApplyResult::Quit);
        assert!(!s.grid.has_value(1, 1).unwrap());
    }
}
