use gridsheet_core::Coord;
use std::io::{self, BufRead, Write};

pub(crate) const INVALID_INPUT: &str = "Invalid input. Try again.";
pub(crate) const OUT_OF_RANGE: &str = "Coordinates out of range. Try again.";

/// Parse an integer after stripping surrounding spaces and tabs.
pub fn parse_int(text: &str) -> Option<i64> {
    let clean = text.trim_matches(|c: char| c == ' ' || c == '\t');
    if clean.is_empty() {
        return None;
    }
    clean.parse::<i64>().ok()
}

/// Line-based prompting over any reader/writer pair.
///
/// Every read returns `Ok(None)` once input is exhausted.
pub(crate) struct Prompter<R, W> {
    input: R,
    pub(crate) output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Print `prompt` and read one line without its line ending.
    pub(crate) fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Prompt until the user types an integer.
    pub(crate) fn read_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_int(&line) {
                Some(n) => return Ok(Some(n)),
                None => writeln!(self.output, "{}", INVALID_INPUT)?,
            }
        }
    }

    /// Prompt until the user names a cell inside a `rows` x `cols` grid.
    ///
    /// The row prompt also accepts a whole address (`B3` or `3,2`), in which
    /// case the column prompt is skipped.
    pub(crate) fn read_cell(&mut self, rows: usize, cols: usize) -> io::Result<Option<Coord>> {
        loop {
            let Some(line) = self.read_line(&format!("Row (1..{}): ", rows))? else {
                return Ok(None);
            };

            let coord = match Coord::parse(&line) {
                Some(coord) => Some(coord),
                None => {
                    let Some(row) = parse_int(&line) else {
                        writeln!(self.output, "{}", INVALID_INPUT)?;
                        continue;
                    };
                    let Some(col) = self.read_int(&format!("Column (1..{}): ", cols))? else {
                        return Ok(None);
                    };
                    match (usize::try_from(row), usize::try_from(col)) {
                        (Ok(row), Ok(col)) => Some(Coord::new(row, col)),
                        _ => None,
                    }
                }
            };

            match coord {
                Some(c) if (1..=rows).contains(&c.row) && (1..=cols).contains(&c.col) => {
                    return Ok(Some(c));
                }
                _ => writeln!(self.output, "{}", OUT_OF_RANGE)?,
            }
        }
    }
}
