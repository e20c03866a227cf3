//! Error types for the client and the session.

use gridsheet_core::LoadState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid server URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// Edits and saves are only allowed once the sheet has loaded
    #[error("Sheet is not ready (state: {0:?})")]
    NotReady(LoadState),

    #[error(transparent)]
    Grid(#[from] gridsheet_core::Error),

    #[error("Failed to save/update sheet: {0}")]
    Save(#[source] ClientError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
