//! Grid state container
//!
//! [`Grid`] holds the sheet a client is editing. Every operation keeps the row
//! count, the column count and the cell rectangle consistent with each other;
//! the grid never has fewer than one row or one column.

use crate::error::{Error, Result};
use crate::header::{column_header, row_header};
use crate::sheet::{Sheet, SheetData};

/// In-memory rectangle of string cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns (every row has exactly this many cells)
    columns: usize,
    /// Cells, one `Vec` per row
    cells: Vec<Vec<String>>,
}

impl Grid {
    /// Create a grid of empty strings
    ///
    /// Zero dimensions are raised to one.
    pub fn blank(rows: usize, columns: usize) -> Self {
        let rows = rows.max(1);
        let columns = columns.max(1);
        Self {
            columns,
            cells: vec![vec![String::new(); columns]; rows],
        }
    }

    /// Build a grid from a fetched sheet
    ///
    /// Fails with [`Error::ShapeMismatch`] if the stored data is not a
    /// `rows` x `columns` rectangle, and with [`Error::InvalidSheetId`] if the
    /// sheet has no id.
    pub fn from_sheet(sheet: &Sheet) -> Result<Self> {
        sheet.validate()?;
        Ok(Self {
            columns: sheet.columns,
            cells: sheet.data.clone(),
        })
    }

    /// Replace the whole grid with a fetched sheet, or with a blank
    /// `initial_rows` x `initial_columns` grid if nothing was found
    pub fn load(
        sheet: Option<&Sheet>,
        initial_rows: usize,
        initial_columns: usize,
    ) -> Result<Self> {
        match sheet {
            Some(sheet) => Self::from_sheet(sheet),
            None => Ok(Self::blank(initial_rows, initial_columns)),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All cells, row by row
    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Get a cell's content
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    /// Replace one cell's content
    pub fn set_cell<S: Into<String>>(&mut self, row: usize, col: usize, value: S) -> Result<()> {
        self.validate_position(row, col)?;
        self.cells[row][col] = value.into();
        Ok(())
    }

    /// Append a row of empty cells
    pub fn add_row(&mut self) {
        self.cells.push(vec![String::new(); self.columns]);
    }

    /// Append an empty cell to every row
    pub fn add_column(&mut self) {
        self.columns += 1;
        for row in &mut self.cells {
            row.push(String::new());
        }
    }

    /// Remove the last row
    ///
    /// Returns `false` (and does nothing) when only one row is left.
    pub fn delete_row(&mut self) -> bool {
        if self.rows() <= 1 {
            return false;
        }
        self.cells.pop();
        true
    }

    /// Remove the last cell of every row
    ///
    /// Returns `false` (and does nothing) when only one column is left.
    pub fn delete_column(&mut self) -> bool {
        if self.columns <= 1 {
            return false;
        }
        self.columns -= 1;
        for row in &mut self.cells {
            row.pop();
        }
        true
    }

    /// Header labels for every column (`A1`, `B1`, ...)
    pub fn column_headers(&self) -> Vec<String> {
        (0..self.columns).map(column_header).collect()
    }

    /// Header labels for every row (`1`, `2`, ...)
    pub fn row_headers(&self) -> Vec<String> {
        (0..self.rows()).map(row_header).collect()
    }

    /// Snapshot of the grid in the shape the store accepts
    pub fn to_sheet_data(&self) -> SheetData {
        SheetData {
            data: self.cells.clone(),
            rows: self.rows(),
            columns: self.columns,
        }
    }

    fn validate_position(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() || col >= self.columns {
            return Err(Error::CellOutOfBounds {
                row,
                col,
                rows: self.rows(),
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(crate::DEFAULT_ROWS, crate::DEFAULT_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn filled(rows: usize, columns: usize) -> Grid {
        let mut grid = Grid::blank(rows, columns);
        for r in 0..rows {
            for c in 0..columns {
                grid.set_cell(r, c, format!("{r}:{c}")).unwrap();
            }
        }
        grid
    }

    fn assert_consistent(grid: &Grid) {
        assert_eq!(grid.cells().len(), grid.rows());
        for row in grid.cells() {
            assert_eq!(row.len(), grid.columns());
        }
    }

    #[test]
    fn test_blank_grid() {
        let grid = Grid::blank(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.cell(2, 3), Some(""));
        assert_eq!(grid.cell(3, 0), None);
        assert_consistent(&grid);

        assert_eq!(Grid::blank(0, 0).rows(), 1);
        assert_eq!(Grid::default().columns(), 10);
    }

    #[test]
    fn test_set_cell() {
        let mut grid = Grid::blank(2, 2);
        grid.set_cell(1, 0, "x").unwrap();
        assert_eq!(grid.cell(1, 0), Some("x"));
    }

    #[test]
    fn test_set_cell_out_of_bounds() {
        let mut grid = Grid::blank(2, 3);
        assert_eq!(
            grid.set_cell(2, 0, "x"),
            Err(Error::CellOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                columns: 3
            })
        );
        assert!(grid.set_cell(0, 3, "x").is_err());
        assert_eq!(grid, Grid::blank(2, 3));
    }

    #[test]
    fn test_add_row_and_column() {
        let mut grid = filled(2, 2);
        grid.add_row();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cells()[2], vec!["", ""]);

        grid.add_column();
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.cells()[0], vec!["0:0", "0:1", ""]);
        assert_consistent(&grid);
    }

    #[test]
    fn test_delete_floor() {
        let mut grid = Grid::blank(1, 1);
        grid.set_cell(0, 0, "keep").unwrap();

        assert!(!grid.delete_row());
        assert!(!grid.delete_column());
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.columns(), 1);
        assert_eq!(grid.cell(0, 0), Some("keep"));
    }

    #[test]
    fn test_delete_removes_last() {
        let mut grid = filled(3, 3);
        assert!(grid.delete_row());
        assert!(grid.delete_column());
        assert_eq!(grid.cells(), &[vec!["0:0", "0:1"], vec!["1:0", "1:1"]]);
    }

    #[test]
    fn test_headers() {
        let grid = Grid::blank(3, 28);
        let headers = grid.column_headers();
        assert_eq!(headers.len(), 28);
        assert_eq!(headers[0], "A1");
        assert_eq!(headers[25], "Z1");
        assert_eq!(headers[26], "A2");
        assert_eq!(headers[27], "B2");
        assert_eq!(grid.row_headers(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_load_falls_back_to_blank() {
        let grid = Grid::load(None, 10, 10).unwrap();
        assert_eq!(grid, Grid::blank(10, 10));
    }

    #[test]
    fn test_load_from_sheet() {
        let sheet = Sheet::new(
            "main",
            SheetData {
                data: vec![vec!["a".into(), "b".into()], vec!["c".into(), "d".into()]],
                rows: 2,
                columns: 2,
            },
        );
        let grid = Grid::load(Some(&sheet), 10, 10).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cell(1, 1), Some("d"));
        assert_eq!(grid.to_sheet_data(), sheet.contents());
    }

    #[test]
    fn test_load_rejects_ragged_sheet() {
        let sheet = Sheet {
            sheet_id: "main".into(),
            data: vec![vec!["a".into()], vec![]],
            rows: 2,
            columns: 1,
        };
        assert!(matches!(
            Grid::load(Some(&sheet), 10, 10),
            Err(Error::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_from_sheet_rejects_blank_id() {
        let sheet = Sheet {
            sheet_id: String::new(),
            data: vec![vec!["a".into()]],
            rows: 1,
            columns: 1,
        };
        assert!(matches!(
            Grid::from_sheet(&sheet),
            Err(Error::InvalidSheetId(_))
        ));
    }

    #[test]
    fn test_from_sheet_copies_cells() {
        let sheet = Sheet {
            sheet_id: "main".into(),
            data: vec![vec!["a".into(), "b".into()]],
            rows: 1,
            columns: 2,
        };
        let grid = Grid::from_sheet(&sheet).unwrap();
        assert_eq!(grid.cells(), sheet.data.as_slice());
        assert_eq!(grid.columns(), 2);
    }

    proptest! {
        #[test]
        fn prop_add_then_delete_row_restores(rows in 1usize..12, columns in 1usize..12) {
            let original = filled(rows, columns);
            let mut grid = original.clone();
            grid.add_row();
            prop_assert!(grid.delete_row());
            prop_assert_eq!(grid, original);
        }

        #[test]
        fn prop_add_then_delete_column_restores(rows in 1usize..12, columns in 1usize..12) {
            let original = filled(rows, columns);
            let mut grid = original.clone();
            grid.add_column();
            prop_assert!(grid.delete_column());
            prop_assert_eq!(grid, original);
        }

        #[test]
        fn prop_operations_keep_grid_rectangular(ops in proptest::collection::vec(0u8..4, 0..40)) {
            let mut grid = Grid::blank(2, 2);
            for op in ops {
                match op {
                    0 => grid.add_row(),
                    1 => grid.add_column(),
                    2 => { grid.delete_row(); }
                    _ => { grid.delete_column(); }
                }
                prop_assert!(grid.rows() >= 1);
                prop_assert!(grid.columns() >= 1);
                prop_assert!(grid.to_sheet_data().validate().is_ok());
            }
        }
    }
}
