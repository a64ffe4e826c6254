//! Register export reading utilities.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{REGISTER_DELIMITER, RegisterTable, read_register};
