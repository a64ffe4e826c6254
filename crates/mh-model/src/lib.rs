//! Data model for the monuments register extractor.

pub mod columns;
pub mod error;
pub mod record;
pub mod row;

pub use error::{ModelError, Result};
pub use record::{
    Coordinates, GENERATED_ID_PREFIX, MonumentRecord, UNKNOWN_DATING, UNTITLED, generated_id,
    write_json,
};
pub use row::Row;
