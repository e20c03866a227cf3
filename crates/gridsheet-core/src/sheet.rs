//! Sheet record and write payload

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A persisted sheet document
///
/// Serializes as `{"sheetId": ..., "data": [[...]], "rows": n, "columns": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    /// Unique identifier of the sheet
    pub sheet_id: String,
    /// Cell contents, `rows` rows of `columns` strings each
    pub data: Vec<Vec<String>>,
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
}

impl Sheet {
    /// Build a sheet from an identifier and its contents
    pub fn new<S: Into<String>>(sheet_id: S, contents: SheetData) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            data: contents.data,
            rows: contents.rows,
            columns: contents.columns,
        }
    }

    /// Check the id and the shape of the data
    pub fn validate(&self) -> Result<()> {
        validate_sheet_id(&self.sheet_id)?;
        validate_shape(&self.data, self.rows, self.columns)
    }

    /// Contents of the sheet without its identifier
    pub fn contents(&self) -> SheetData {
        SheetData {
            data: self.data.clone(),
            rows: self.rows,
            columns: self.columns,
        }
    }
}

/// Contents of a sheet as sent by a client on save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetData {
    pub data: Vec<Vec<String>>,
    pub rows: usize,
    pub columns: usize,
}

impl SheetData {
    /// Check that `data` is a `rows` x `columns` rectangle
    pub fn validate(&self) -> Result<()> {
        validate_shape(&self.data, self.rows, self.columns)
    }
}

/// Reject empty sheet identifiers
pub fn validate_sheet_id(sheet_id: &str) -> Result<()> {
    if sheet_id.trim().is_empty() {
        return Err(Error::InvalidSheetId(sheet_id.to_string()));
    }
    Ok(())
}

fn validate_shape(data: &[Vec<String>], rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(Error::shape(format!(
            "sheet must have at least one row and one column, got {rows}x{columns}"
        )));
    }

    if data.len() != rows {
        return Err(Error::shape(format!(
            "declared {rows} rows but data has {}",
            data.len()
        )));
    }

    if let Some((index, row)) = data.iter().enumerate().find(|(_, r)| r.len() != columns) {
        return Err(Error::shape(format!(
            "row {index} has {} cells, expected {columns}",
            row.len()
        )));
    }

    Ok(())
}
