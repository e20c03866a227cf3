//! gridsheet-server - serve the sheet store over HTTP

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use gridsheet_core::sheet::validate_sheet_id;
use gridsheet_server::{serve, AppState, ServerConfig};
use gridsheet_store::SqliteSheetStore;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment and flags still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::parse();
    validate_sheet_id(&config.default_sheet).context("Invalid --default-sheet")?;

    let store = Arc::new(
        SqliteSheetStore::open(&config.database)
            .with_context(|| format!("Failed to open '{}'", config.database.display()))?,
    );

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    let state = AppState::new(store.clone(), config.default_sheet.as_str());
    serve(listener, state, shutdown_signal())
        .await
        .context("Server error")?;

    match Arc::try_unwrap(store) {
        Ok(store) => store.close().context("Failed to close sheet store")?,
        Err(_) => tracing::warn!("Sheet store still in use at shutdown, dropping it"),
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
