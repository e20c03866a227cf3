//! Mapping of store failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gridsheet_core::api::{MessageBody, FETCH_FAILED, SAVE_FAILED, SHEET_NOT_FOUND};
use gridsheet_store::StoreError;
use thiserror::Error;

/// An error answered with a JSON `{message}` body.
///
/// Storage failures carry only a generic message; the cause is logged on the
/// server and never sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", SHEET_NOT_FOUND)]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Failed(&'static str),
}

impl ApiError {
    /// Convert an error from a save request
    pub fn save(err: StoreError) -> Self {
        Self::from_store(err, SAVE_FAILED)
    }

    /// Convert an error from a fetch request
    pub fn fetch(err: StoreError) -> Self {
        Self::from_store(err, FETCH_FAILED)
    }

    fn from_store(err: StoreError, failure: &'static str) -> Self {
        if err.is_storage_failure() {
            tracing::error!(error = %err, "{failure}");
            return ApiError::Failed(failure);
        }
        match err {
            StoreError::Invalid(e) => ApiError::BadRequest(e.to_string()),
            _ => ApiError::NotFound,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(MessageBody::new(self.to_string()))).into_response()
    }
}
