//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use gridsheet_core::DEFAULT_SHEET_ID;

/// Configuration for the sheet server.
///
/// Every option can also be set through the environment (or a `.env` file).
#[derive(Debug, Clone, Parser)]
#[command(name = "gridsheet-server")]
#[command(author, version, about = "Serve gridsheet sheets over HTTP")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "GRIDSHEET_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// SQLite database file holding the sheets
    #[arg(long, env = "GRIDSHEET_DATABASE", default_value = "gridsheet.db")]
    pub database: PathBuf,

    /// Sheet id written by `POST /api/sheets`
    #[arg(long, env = "GRIDSHEET_DEFAULT_SHEET", default_value = DEFAULT_SHEET_ID)]
    pub default_sheet: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            database: PathBuf::from("gridsheet.db"),
            default_sheet: DEFAULT_SHEET_ID.to_string(),
        }
    }
}
