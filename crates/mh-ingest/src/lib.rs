//! Monuments register ingestion.
//!
//! Loads the semicolon-delimited register export into [`Row`] maps keyed by
//! header name, together with the detected header row.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mh_ingest::read_register;
//!
//! let table = read_register(Path::new("immeubles_mh.csv"))?;
//! println!("{:?}", table.headers.columns);
//! for row in &table.rows {
//!     // ...
//! }
//! ```
//!
//! [`Row`]: mh_model::Row

mod error;
mod register;

// === Error Types ===
pub use error::{IngestError, Result};

// === Register Reading ===
pub use register::{CsvHeaders, REGISTER_DELIMITER, RegisterTable, read_register};
