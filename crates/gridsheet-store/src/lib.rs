//! Sheet storage for gridsheet.
//!
//! A sheet store keeps one document per sheet id and supports exactly two
//! operations: replace-or-insert a whole sheet, and fetch a sheet by id. There
//! is no partial update, no delete and no version check; the last write to an
//! id wins.
//!
//! # Example
//!
//! ```rust
//! use gridsheet_core::SheetData;
//! use gridsheet_store::{SheetStore, SqliteSheetStore};
//!
//! # fn example() -> gridsheet_store::Result<()> {
//! let store = SqliteSheetStore::open_in_memory()?;
//!
//! let contents = SheetData {
//!     data: vec![vec!["a".into(), "b".into()]],
//!     rows: 1,
//!     columns: 2,
//! };
//! store.upsert_sheet("main", contents)?;
//!
//! let sheet = store.get_sheet("main")?;
//! assert_eq!(sheet.data[0][1], "b");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use sqlite::SqliteSheetStore;

use gridsheet_core::{Sheet, SheetData};

/// Document store keyed by sheet id
pub trait SheetStore: Send + Sync {
    /// Insert the sheet, or fully replace the one stored under `sheet_id`
    ///
    /// The contents are validated first; a [`StoreError::Invalid`] write never
    /// reaches storage. Returns the record as stored.
    fn upsert_sheet(&self, sheet_id: &str, contents: SheetData) -> Result<Sheet>;

    /// Fetch the sheet stored under `sheet_id`
    ///
    /// Returns [`StoreError::NotFound`] if nothing was ever saved under that id.
    fn get_sheet(&self, sheet_id: &str) -> Result<Sheet>;
}
