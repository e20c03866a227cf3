//! Client-side controller for one sheet.

use gridsheet_core::{Grid, LoadState, Sheet, DEFAULT_COLUMNS, DEFAULT_ROWS};

use crate::client::SheetClient;
use crate::error::SessionError;

/// Message shown when a sheet could not be loaded
pub const LOAD_FAILED: &str = "Failed to load sheet data";

/// One sheet being edited.
///
/// A session starts in [`LoadState::Loading`]. [`load`](Self::load) fetches the
/// sheet and moves to `Ready` (with a blank grid if the sheet was never saved)
/// or `Failed`. Every edit and [`save`](Self::save) is refused with
/// [`SessionError::NotReady`] outside `Ready`, so nothing typed before the
/// fetch completes can be lost or overwritten by it.
#[derive(Debug)]
pub struct SheetSession {
    client: SheetClient,
    sheet_id: String,
    initial_rows: usize,
    initial_columns: usize,
    state: LoadState,
    grid: Grid,
    /// Read-only echo of the selected cell's content
    selected: String,
}

impl SheetSession {
    /// Create a session for `sheet_id` that falls back to a 10x10 blank grid
    pub fn new<S: Into<String>>(client: SheetClient, sheet_id: S) -> Self {
        Self {
            client,
            sheet_id: sheet_id.into(),
            initial_rows: DEFAULT_ROWS,
            initial_columns: DEFAULT_COLUMNS,
            state: LoadState::Loading,
            grid: Grid::blank(DEFAULT_ROWS, DEFAULT_COLUMNS),
            selected: String::new(),
        }
    }

    /// Set the size of the blank grid used when the sheet was never saved
    pub fn with_initial_size(mut self, rows: usize, columns: usize) -> Self {
        self.initial_rows = rows;
        self.initial_columns = columns;
        self.grid = Grid::blank(rows, columns);
        self
    }

    pub fn sheet_id(&self) -> &str {
        &self.sheet_id
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The grid, once loaded
    pub fn grid(&self) -> Option<&Grid> {
        self.state.is_ready().then_some(&self.grid)
    }

    /// Content of the most recently selected or edited cell
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Fetch the sheet and replace the local grid with it.
    pub async fn load(&mut self) -> &LoadState {
        self.state = LoadState::Loading;

        let fetched = self.client.fetch_sheet(&self.sheet_id).await;
        self.state = match fetched {
            Ok(sheet) => self.apply(sheet.as_ref()),
            Err(e) => {
                tracing::error!(sheet_id = %self.sheet_id, error = %e, "Error loading sheet");
                LoadState::Failed(LOAD_FAILED.to_string())
            }
        };
        &self.state
    }

    fn apply(&mut self, sheet: Option<&Sheet>) -> LoadState {
        match Grid::load(sheet, self.initial_rows, self.initial_columns) {
            Ok(grid) => {
                if sheet.is_none() {
                    tracing::info!(sheet_id = %self.sheet_id, "Sheet not saved yet, starting blank");
                }
                self.grid = grid;
                self.selected.clear();
                LoadState::Ready
            }
            Err(e) => {
                tracing::error!(sheet_id = %self.sheet_id, error = %e, "Stored sheet is unusable");
                LoadState::Failed(LOAD_FAILED.to_string())
            }
        }
    }

    /// Push the whole grid to the server.
    ///
    /// The local grid is left as it is; the server's copy is not merged back.
    pub async fn save(&self) -> Result<Sheet, SessionError> {
        let grid = self.ready_grid()?;
        let sheet = self
            .client
            .save_sheet(&self.sheet_id, &grid.to_sheet_data())
            .await
            .map_err(|e| {
                tracing::error!(sheet_id = %self.sheet_id, error = %e, "Error saving sheet");
                SessionError::Save(e)
            })?;

        tracing::info!(sheet_id = %sheet.sheet_id, "Sheet saved/updated successfully");
        Ok(sheet)
    }

    /// Select a cell, echoing its content
    pub fn select(&mut self, row: usize, col: usize) -> Result<&str, SessionError> {
        let grid = self.ready_grid()?;
        let content = grid
            .cell(row, col)
            .ok_or(gridsheet_core::Error::CellOutOfBounds {
                row,
                col,
                rows: grid.rows(),
                columns: grid.columns(),
            })?
            .to_string();
        self.selected = content;
        Ok(&self.selected)
    }

    /// Type into a cell: set its content and echo it
    pub fn input<S: Into<String>>(
        &mut self,
        row: usize,
        col: usize,
        value: S,
    ) -> Result<(), SessionError> {
        let value = value.into();
        self.ready_grid_mut()?.set_cell(row, col, value.clone())?;
        self.selected = value;
        Ok(())
    }

    /// Set a cell without touching the selection echo
    pub fn set_cell<S: Into<String>>(
        &mut self,
        row: usize,
        col: usize,
        value: S,
    ) -> Result<(), SessionError> {
        self.ready_grid_mut()?.set_cell(row, col, value)?;
        Ok(())
    }

    pub fn add_row(&mut self) -> Result<(), SessionError> {
        self.ready_grid_mut()?.add_row();
        Ok(())
    }

    pub fn add_column(&mut self) -> Result<(), SessionError> {
        self.ready_grid_mut()?.add_column();
        Ok(())
    }

    /// Remove the last row; `Ok(false)` if only one row is left
    pub fn delete_row(&mut self) -> Result<bool, SessionError> {
        Ok(self.ready_grid_mut()?.delete_row())
    }

    /// Remove the last column; `Ok(false)` if only one column is left
    pub fn delete_column(&mut self) -> Result<bool, SessionError> {
        Ok(self.ready_grid_mut()?.delete_column())
    }

    fn ready_grid(&self) -> Result<&Grid, SessionError> {
        if !self.state.is_ready() {
            return Err(SessionError::NotReady(self.state.clone()));
        }
        Ok(&self.grid)
    }

    fn ready_grid_mut(&mut self) -> Result<&mut Grid, SessionError> {
        if !self.state.is_ready() {
            return Err(SessionError::NotReady(self.state.clone()));
        }
        Ok(&mut self.grid)
    }
}
