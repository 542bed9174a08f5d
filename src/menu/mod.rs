//! Interactive, line-based menu over a [`Grid`].
//!
//! The menu validates everything it reads before calling the grid, and
//! re-prompts instead of failing on bad input. It runs over any
//! `BufRead`/`Write` pair so sessions can be scripted.

mod actions;
mod prompt;

use crate::config::Config;
use crate::error::Result;
use actions::{ApplyResult, MenuChoice};
use gridsheet_core::Grid;
use prompt::Prompter;
use std::io::{BufRead, Write};

pub(crate) const MENU_TEXT: &str = "\nMenu:\n\
1) Insert cell\n\
2) Update cell\n\
3) Check cell\n\
4) Preview\n\
5) Sum row\n\
6) Sum column\n\
0) Quit";

/// A menu session owning its grid.
pub(crate) struct Session<R, W> {
    io: Prompter<R, W>,
    grid: Grid,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Show the menu and apply choices until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.io.output, "{}", MENU_TEXT)?;
            let Some(option) = self.io.read_int("Option: ")? else {
                return Ok(());
            };

            let result = match MenuChoice::from_number(option) {
                Some(choice) => self.apply(choice)?,
                None => {
                    writeln!(self.io.output, "Invalid option.")?;
                    ApplyResult::Continue
                }
            };
            if result == ApplyResult::Quit {
                return Ok(());
            }
        }
    }
}

/// Run a full session: banner, grid dimensions, then the menu loop.
///
/// Dimensions come from `config` when set, otherwise they are prompted for.
/// Returns the grid as it was when the session ended, or `None` if input
/// ran out before the grid could be created.
pub fn run_menu<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> Result<Option<Grid>> {
    let mut io = Prompter::new(input, output);
    writeln!(io.output, "=== Spreadsheet (interactive menu) ===")?;

    let Some(grid) = create_grid(&mut io, config)? else {
        return Ok(None);
    };

    let mut session = Session { io, grid };
    session.run()?;
    Ok(Some(session.into_grid()))
}

fn create_grid<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    config: &Config,
) -> Result<Option<Grid>> {
    let Some(rows) = dimension(io, config.rows, "Number of rows: ")? else {
        return Ok(None);
    };
    let Some(cols) = dimension(io, config.cols, "Number of columns: ")? else {
        return Ok(None);
    };
    Ok(Some(Grid::with_cell_width(rows, cols, config.cell_width)?))
}

/// Use the configured value or prompt for a positive integer.
fn dimension<R: BufRead, W: Write>(
    io: &mut Prompter<R, W>,
    configured: Option<usize>,
    prompt: &str,
) -> Result<Option<usize>> {
    if let Some(value) = configured {
        return Ok(Some(value));
    }
    loop {
        let Some(n) = io.read_int(prompt)? else {
            return Ok(None);
        };
        match usize::try_from(n) {
            Ok(value) if value > 0 => return Ok(Some(value)),
            _ => writeln!(io.output, "Dimensions must be positive. Try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use gridsheet_core::{GridError, Scalar};
    use std::io::Cursor;

    fn run_script(config: &Config, script: &str) -> (Option<Grid>, String) {
        let mut out = Vec::new();
        let grid = run_menu(config, Cursor::new(script.as_bytes().to_vec()), &mut out).unwrap();
        (grid, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prompts_for_dimensions() {
        let (grid, out) = run_script(&Config::default(), "0\n-2\n2\nx\n3\n0\n");
        let grid = grid.unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.cell_width(), 12);
        assert_eq!(out.matches("Dimensions must be positive").count(), 2);
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_configured_dimensions_skip_prompts() {
        let config = Config {
            cell_width: 5,
            rows: Some(1),
            cols: Some(2),
        };
        let (grid, out) = run_script(&config, "0\n");
        let grid = grid.unwrap();
        assert_eq!((grid.rows(), grid.cols(), grid.cell_width()), (1, 2, 5));
        assert!(!out.contains("Number of rows"));
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        let config = Config {
            cell_width: 4,
            rows: Some(usize::MAX / 2),
            cols: Some(2),
        };
        let err = run_menu(&config, Cursor::new(Vec::new()), Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Grid(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_eof_before_grid() {
        let (grid, _) = run_script(&Config::default(), "3\n");
        assert!(grid.is_none());
    }

    #[test]
    fn test_eof_ends_menu_loop() {
        let (grid, out) = run_script(&Config::default(), "1\n1\n");
        assert!(grid.is_some());
        assert!(out.contains("Option: "));
        assert!(!out.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_option() {
        let (_, out) = run_script(&Config::default(), "1\n1\n9\n0\n");
        assert!(out.contains("Invalid option."));
    }

    #[test]
    fn test_insert_update_check_and_sums() {
        let script = "2\n2\n\
            1\n1\n1\n3\n\
            1\n1\n1\nagain\n\
            1\nA2\n4\n\
            2\n2\n2\nnope\n\
            2\n1\n1\n5\n\
            3\n1\n1\n\
            3\n2\n2\n\
            5\n1\n\
            6\n1\n\
            5\n7\n\
            0\n";
        let (grid, out) = run_script(&Config::default(), script);
        let grid = grid.unwrap();

        assert_eq!(grid.get(1, 1).unwrap(), &"5");
        assert_eq!(grid.get(2, 1).unwrap(), &"4");
        assert!(out.contains("Inserted at (1, 1)."));
        assert!(out.contains("Could not insert: the cell already has information."));
        assert!(out.contains("Inserted at (2, 1)."));
        assert!(out.contains("Could not update: the cell is empty."));
        assert!(out.contains("Updated (1, 1)."));
        assert!(out.contains("Cell (1, 1) HAS information."));
        assert!(out.contains("Cell (2, 2) is EMPTY."));
        assert!(out.contains("Row 1 sum = 5.0"));
        assert!(out.contains("Column 1 sum = 9.0"));
        assert!(out.contains("Row out of range."));
    }

    #[test]
    fn test_preview_prints_render() {
        let config = Config {
            cell_width: 4,
            rows: Some(1),
            cols: Some(2),
        };
        let (grid, out) = run_script(&config, "1\n1\n1\nab\n4\n0\n");
        let grid = grid.unwrap();
        assert_eq!(grid.get(1, 1).unwrap(), &Scalar::from("ab"));
        assert!(out.contains(&grid.render()));
        assert!(out.contains("    1   2   \n1   ab      "));
    }
}
