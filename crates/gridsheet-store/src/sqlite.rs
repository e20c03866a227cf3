//! SQLite-backed sheet store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use gridsheet_core::sheet::validate_sheet_id;
use gridsheet_core::{Sheet, SheetData};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::SheetStore;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS sheets (
        sheet_id     TEXT PRIMARY KEY NOT NULL,
        data         TEXT NOT NULL,
        row_count    INTEGER NOT NULL,
        column_count INTEGER NOT NULL
    );
";

/// Sheet store over a single SQLite connection.
///
/// Each sheet is one row; `data` holds the cell rectangle as a JSON array of
/// arrays. The connection sits behind a mutex because `rusqlite::Connection`
/// is not `Sync`.
pub struct SqliteSheetStore {
    conn: Mutex<Connection>,
}

impl SqliteSheetStore {
    /// Open (or create) a store at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        let journal_mode: String =
            conn.query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))?;
        if !journal_mode.eq_ignore_ascii_case("wal") {
            tracing::warn!(
                "Could not enable WAL for {}, journal mode is {journal_mode}",
                path.display()
            );
        }
        conn.execute_batch("PRAGMA synchronous=NORMAL; PRAGMA busy_timeout=5000;")?;

        tracing::info!("Opened sheet store at {}", path.display());
        Self::with_connection(conn)
    }

    /// Open a store that lives only as long as this handle.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Close the underlying connection, flushing pending writes.
    pub fn close(self) -> Result<()> {
        let conn = self.conn.into_inner().map_err(|_| StoreError::Poisoned)?;
        conn.close().map_err(|(_, e)| StoreError::Sqlite(e))?;
        tracing::info!("Closed sheet store");
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl SheetStore for SqliteSheetStore {
    fn upsert_sheet(&self, sheet_id: &str, contents: SheetData) -> Result<Sheet> {
        validate_sheet_id(sheet_id)?;
        contents.validate()?;

        let data = serde_json::to_string(&contents.data)?;
        let conn = self.lock()?;

        // One statement, so a concurrent reader sees either the old or the new
        // document, never a mix.
        let sheet = conn.query_row(
            "INSERT INTO sheets (sheet_id, data, row_count, column_count)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(sheet_id) DO UPDATE SET
                 data = excluded.data,
                 row_count = excluded.row_count,
                 column_count = excluded.column_count
             RETURNING sheet_id, data, row_count, column_count",
            params![sheet_id, data, contents.rows, contents.columns],
            map_row,
        )?;

        tracing::debug!(
            sheet_id,
            rows = contents.rows,
            columns = contents.columns,
            "Upserted sheet"
        );
        sheet.into_sheet()
    }

    fn get_sheet(&self, sheet_id: &str) -> Result<Sheet> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT sheet_id, data, row_count, column_count
                 FROM sheets WHERE sheet_id = ?1",
                params![sheet_id],
                map_row,
            )
            .optional()?;

        match row {
            Some(row) => {
                tracing::debug!(sheet_id, "Fetched sheet");
                row.into_sheet()
            }
            None => Err(StoreError::NotFound(sheet_id.to_string())),
        }
    }
}

/// A `sheets` row before its JSON column is decoded
struct SheetRow {
    sheet_id: String,
    data: String,
    rows: usize,
    columns: usize,
}

impl SheetRow {
    fn into_sheet(self) -> Result<Sheet> {
        Ok(Sheet {
            sheet_id: self.sheet_id,
            data: serde_json::from_str(&self.data)?,
            rows: self.rows,
            columns: self.columns,
        })
    }
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SheetRow> {
    Ok(SheetRow {
        sheet_id: row.get(0)?,
        data: row.get(1)?,
        rows: row.get(2)?,
        columns: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contents(rows: &[&[&str]]) -> SheetData {
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect();
        SheetData {
            rows: data.len(),
            columns: data.first().map_or(0, Vec::len),
            data,
        }
    }

    #[test]
    fn test_upsert_returns_stored_record() {
        let store = SqliteSheetStore::open_in_memory().unwrap();
        let sheet = store
            .upsert_sheet("main", contents(&[&["a", "b"], &["c", "d"], &["e", "f"]]))
            .unwrap();

        assert_eq!(sheet.sheet_id, "main");
        assert_eq!(sheet.rows, 3);
        assert_eq!(sheet.columns, 2);
        assert_eq!(sheet.data[2], vec!["e", "f"]);
    }

    #[test]
    fn test_get_missing_sheet() {
        let store = SqliteSheetStore::open_in_memory().unwrap();
        let err = store.get_sheet("main").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref id) if id == "main"));
        assert!(!err.is_storage_failure());
    }

    #[test]
    fn test_upsert_replaces_whole_sheet() {
        let store = SqliteSheetStore::open_in_memory().unwrap();
        store
            .upsert_sheet(
                "main",
                contents(&[&["1", "2", "3"], &["4", "5", "6"], &["7", "8", "9"]]),
            )
            .unwrap();
        store
            .upsert_sheet("main", contents(&[&["w", "x"], &["y", "z"]]))
            .unwrap();

        let sheet = store.get_sheet("main").unwrap();
        assert_eq!(sheet.contents(), contents(&[&["w", "x"], &["y", "z"]]));
    }

    #[test]
    fn test_sheets_are_keyed_by_id() {
        let store = SqliteSheetStore::open_in_memory().unwrap();
        store.upsert_sheet("main", contents(&[&["m"]])).unwrap();
        store.upsert_sheet("other", contents(&[&["o"]])).unwrap();

        assert_eq!(store.get_sheet("main").unwrap().data, vec![vec!["m"]]);
        assert_eq!(store.get_sheet("other").unwrap().data, vec![vec!["o"]]);
    }

    #[test]
    fn test_rejects_ragged_data() {
        let store = SqliteSheetStore::open_in_memory().unwrap();
        let ragged = SheetData {
            data: vec![vec!["a".into(), "b".into()], vec!["c".into()]],
            rows: 2,
            columns: 2,
        };

        let err = store.upsert_sheet("main", ragged).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Invalid(gridsheet_core::Error::ShapeMismatch(_))
        ));
        assert!(matches!(
            store.get_sheet("main"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_rejects_blank_id() {
        let store = SqliteSheetStore::open_in_memory().unwrap();
        let err = store.upsert_sheet("", contents(&[&["a"]])).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Invalid(gridsheet_core::Error::InvalidSheetId(_))
        ));
    }

    #[test]
    fn test_close() {
        let store = SqliteSheetStore::open_in_memory().unwrap();
        store.upsert_sheet("main", contents(&[&["a"]])).unwrap();
        store.close().unwrap();
    }
}
