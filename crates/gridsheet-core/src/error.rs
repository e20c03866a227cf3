//! Error types for gridsheet-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridsheet-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Cell position outside the current grid
    #[error("Cell ({row}, {col}) out of bounds (grid is {rows}x{columns})")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    /// Sheet data does not match its declared dimensions
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Empty or otherwise unusable sheet identifier
    #[error("Invalid sheet id: {0:?}")]
    InvalidSheetId(String),

    /// Column header that does not follow the `<letter><number>` form
    #[error("Invalid column header: {0:?}")]
    InvalidColumnHeader(String),
}

impl Error {
    /// Create a new shape mismatch error with a message
    pub fn shape<S: Into<String>>(msg: S) -> Self {
        Error::ShapeMismatch(msg.into())
    }
}
