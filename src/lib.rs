//! Senders for the local WaSender HTTP API.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wasender_client::client::WaSenderClient;
//! use wasender_client::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let client = WaSenderClient::new(Config::default())?;
//!     let resp = client.send_image(Path::new("res.png"), "Test document")?;
//!     println!("{}", resp.body);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod media;
pub mod payload;
