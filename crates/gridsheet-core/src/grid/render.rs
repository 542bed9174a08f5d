use super::Grid;

impl Grid {
    /// Render the grid as fixed-width text.
    ///
    /// The first line holds a blank label field followed by the column
    /// numbers; each following line starts with the row number. Every field
    /// is cut or padded to `cell_width` characters. No trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows() + 1);

        let mut header = self.pad("");
        for col in 1..=self.cols() {
            header.push_str(&self.pad(&col.to_string()));
        }
        lines.push(header);

        for (r, row) in self.cells.chunks(self.cols()).enumerate() {
            let mut line = self.pad(&(r + 1).to_string());
            for cell in row {
                line.push_str(&self.pad(&cell.to_string()));
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    /// Cut `text` from the right or pad it with trailing spaces to the cell width.
    fn pad(&self, text: &str) -> String {
        let mut field: String = text.chars().take(self.cell_width()).collect();
        let len = field.chars().count();
        field.extend(std::iter::repeat_n(' ', self.cell_width() - len));
        field
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::scalar::Scalar;

    #[test]
    fn test_render_empty_grid() {
        let grid = Grid::with_cell_width(2, 2, 4).unwrap();
        let out = grid.render();
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "    1   2   ");
        assert_eq!(lines[1], "1           ");
        assert_eq!(lines[2], "2           ");
        for line in lines {
            assert_eq!(line.chars().count(), 4 * 3);
        }
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_render_truncates_and_pads() {
        let mut grid = Grid::with_cell_width(1, 3, 3).unwrap();
        grid.set(1, 1, "abcdef").unwrap();
        grid.set(1, 2, 7).unwrap();
        grid.set(1, 3, Scalar::Float(2.0)).unwrap();
        assert_eq!(grid.render(), "   1  2  3  \n1  abc7  2.0");
    }

    #[test]
    fn test_render_counts_characters_not_bytes() {
        let mut grid = Grid::with_cell_width(1, 1, 3).unwrap();
        grid.set(1, 1, "ñandú").unwrap();
        assert_eq!(grid.render(), "   1  \n1  ñan");
    }

    #[test]
    fn test_render_truncates_large_indices() {
        let grid = Grid::with_cell_width(10, 1, 1).unwrap();
        let out = grid.render();
        let last = out.lines().last().unwrap();
        assert_eq!(last, "1 ");
        assert_eq!(out.lines().count(), 11);
    }

    #[test]
    fn test_render_blank_text_shows_as_spaces() {
        let mut grid = Grid::with_cell_width(1, 2, 2).unwrap();
        grid.insert(1, 1, "\t").unwrap();
        grid.insert(1, 2, "ok").unwrap();
        assert_eq!(grid.render(), "  1 2 \n1 \t ok");
    }
}
