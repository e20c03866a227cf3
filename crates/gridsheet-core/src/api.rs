//! JSON bodies exchanged between the server and its clients

use serde::{Deserialize, Serialize};

use crate::sheet::Sheet;

/// Message returned after a successful save
pub const SAVE_SUCCEEDED: &str = "Sheet saved/updated successfully!";
/// Message returned when a save hits a storage failure
pub const SAVE_FAILED: &str = "Failed to save/update sheet.";
/// Message returned when a fetch hits a storage failure
pub const FETCH_FAILED: &str = "Failed to fetch sheet data.";
/// Message returned when no sheet is stored under the requested id
pub const SHEET_NOT_FOUND: &str = "Sheet not found.";

/// Body of every error response, and of the greeting endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub message: String,
    pub sheet: Sheet,
}
