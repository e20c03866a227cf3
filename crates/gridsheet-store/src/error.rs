//! Error types for the sheet store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Sheet not found: {0}")]
    NotFound(String),

    #[error("Invalid sheet: {0}")]
    Invalid(#[from] gridsheet_core::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Stored sheet data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store connection lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// Check if this is a storage-layer failure rather than a missing or
    /// rejected sheet
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            StoreError::Sqlite(_) | StoreError::Json(_) | StoreError::Poisoned
        )
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
