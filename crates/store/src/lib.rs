//! Document store client for the Roadwatch report collection.
//!
//! The collection persists as a single JSON document in a hosted key-value
//! bin reached over plain HTTP: a `GET` returns the whole document, a `PUT`
//! replaces it wholesale. Authentication is a static access key sent as a
//! request header. There is no retry, no queuing, and no version check;
//! concurrent writers race last-write-wins at the remote store.
//!
//! # Example
//!
//! ```rust,no_run
//! use roadwatch_reports::ReportStore;
//! use roadwatch_store::{JsonBinStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads ROADWATCH_BIN_ID / ROADWATCH_MASTER_KEY from the environment.
//!     let store = JsonBinStore::from_env()?;
//!
//!     let reports = store.load().await?;
//!     println!("{} report(s) on record", reports.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;

pub use client::JsonBinStore;
pub use config::StoreConfig;
