//! HTTP server for gridsheet.
//!
//! Exposes a [`SheetStore`] over JSON:
//!
//! | method | path | effect |
//! |---|---|---|
//! | `GET` | `/` | greeting |
//! | `POST` | `/api/sheets` | upsert the default sheet |
//! | `PUT` | `/api/sheets/:sheetId` | upsert the named sheet |
//! | `GET` | `/api/sheets/:sheetId` | fetch a sheet, `404` if never saved |
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gridsheet_server::{serve, AppState};
//! use gridsheet_store::SqliteSheetStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = Arc::new(SqliteSheetStore::open_in_memory()?);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//!
//! serve(listener, AppState::new(store, "main"), async {
//!     let _ = tokio::signal::ctrl_c().await;
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;

use std::future::Future;
use std::sync::Arc;

use gridsheet_store::SheetStore;
use tokio::net::TcpListener;

/// Shared handler state: the injected store handle and the id that
/// `POST /api/sheets` writes to.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SheetStore>,
    pub default_sheet_id: Arc<str>,
}

impl AppState {
    pub fn new<S: Into<Arc<str>>>(store: Arc<dyn SheetStore>, default_sheet_id: S) -> Self {
        Self {
            store,
            default_sheet_id: default_sheet_id.into(),
        }
    }
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Server is running on http://{addr}");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
