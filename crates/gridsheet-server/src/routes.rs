//! Request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use gridsheet_core::api::{MessageBody, SaveResponse, FETCH_FAILED, SAVE_FAILED, SAVE_SUCCEEDED};
use gridsheet_core::{Sheet, SheetData};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::AppState;

/// Build the API router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/api/sheets", post(save_default_sheet))
        .route("/api/sheets/:sheet_id", get(fetch_sheet).put(save_sheet))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn hello() -> Json<MessageBody> {
    Json(MessageBody::new("Hello World!"))
}

/// `POST /api/sheets`: upsert under the configured default id
async fn save_default_sheet(
    State(state): State<AppState>,
    payload: Result<Json<SheetData>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let sheet_id = state.default_sheet_id.to_string();
    upsert(state, sheet_id, payload).await
}

/// `PUT /api/sheets/:sheet_id`
async fn save_sheet(
    State(state): State<AppState>,
    Path(sheet_id): Path<String>,
    payload: Result<Json<SheetData>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    upsert(state, sheet_id, payload).await
}

async fn upsert(
    state: AppState,
    sheet_id: String,
    payload: Result<Json<SheetData>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(contents) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let store = state.store.clone();
    let sheet = tokio::task::spawn_blocking(move || store.upsert_sheet(&sheet_id, contents))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Save task did not complete");
            ApiError::Failed(SAVE_FAILED)
        })?
        .map_err(ApiError::save)?;

    tracing::info!(
        sheet_id = %sheet.sheet_id,
        rows = sheet.rows,
        columns = sheet.columns,
        "Sheet saved"
    );

    Ok(Json(SaveResponse {
        message: SAVE_SUCCEEDED.to_string(),
        sheet,
    }))
}

/// `GET /api/sheets/:sheet_id`
async fn fetch_sheet(
    State(state): State<AppState>,
    Path(sheet_id): Path<String>,
) -> Result<Json<Sheet>, ApiError> {
    let store = state.store.clone();
    let sheet = tokio::task::spawn_blocking(move || store.get_sheet(&sheet_id))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Fetch task did not complete");
            ApiError::Failed(FETCH_FAILED)
        })?
        .map_err(ApiError::fetch)?;

    Ok(Json(sheet))
}
