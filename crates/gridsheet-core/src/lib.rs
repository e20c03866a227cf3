//! # gridsheet-core
//!
//! Core data structures for the gridsheet spreadsheet.
//!
//! This crate provides the types shared by the store, the server and the client:
//! - [`Sheet`] and [`SheetData`] - The persisted record and its write payload
//! - [`Grid`] - The in-memory grid state container edited by the client
//! - [`column_header`] - Derived column header labels (`A1`..`Z1`, `A2`, ...)
//! - [`LoadState`] - Lifecycle of a grid that is fetched from the server
//! - [`api`] - JSON bodies of the HTTP interface
//!
//! ## Example
//!
//! ```rust
//! use gridsheet_core::Grid;
//!
//! let mut grid = Grid::blank(2, 2);
//! grid.set_cell(0, 1, "Hello").unwrap();
//! grid.add_row();
//!
//! assert_eq!(grid.rows(), 3);
//! assert_eq!(grid.cell(0, 1), Some("Hello"));
//! assert_eq!(grid.column_headers(), vec!["A1", "B1"]);
//! ```

pub mod api;
pub mod error;
pub mod grid;
pub mod header;
pub mod sheet;
pub mod state;

pub use error::{Error, Result};
pub use grid::Grid;
pub use header::{column_header, parse_column_header};
pub use sheet::{Sheet, SheetData};
pub use state::LoadState;

/// Identifier of the sheet the single-sheet UI edits
pub const DEFAULT_SHEET_ID: &str = "main";

/// Row count of a blank grid
pub const DEFAULT_ROWS: usize = 10;

/// Column count of a blank grid
pub const DEFAULT_COLUMNS: usize = 10;
