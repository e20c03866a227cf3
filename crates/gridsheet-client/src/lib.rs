//! Client side of gridsheet.
//!
//! [`SheetClient`] talks to the server's JSON API. [`SheetSession`] is the
//! controller a user interface drives: it loads one sheet into a
//! [`Grid`](gridsheet_core::Grid), applies edits locally, tracks the selected
//! cell's content and pushes the whole grid back on save.
//!
//! # Example
//!
//! ```rust,no_run
//! use gridsheet_client::{ClientConfig, SheetClient, SheetSession};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SheetClient::new(&ClientConfig::new("http://localhost:5000"))?;
//! let mut session = SheetSession::new(client, "main");
//!
//! session.load().await;
//! session.input(0, 0, "Hello")?;
//! session.add_column()?;
//! session.save().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use client::SheetClient;
pub use config::ClientConfig;
pub use error::{ClientError, SessionError};
pub use session::SheetSession;
