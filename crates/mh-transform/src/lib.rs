//! Transformation logic for monuments register rows.
//!
//! - **classifier**: keep/drop decision from denomination, title and domain
//! - **century**: Roman numeral helpers and the century fallback chain
//! - **coordinates**: `"lat, lon"` parsing
//! - **record**: field mapping of a retained row
//! - **pipeline**: single-pass fold producing records and counters

pub mod century;
pub mod classifier;
pub mod coordinates;
pub mod pipeline;
pub mod record;

pub use century::{century_label, century_label_or_unknown, roman_to_int, to_roman};
pub use classifier::{Decision, classify, classify_row, is_selected};
pub use coordinates::parse_coordinates;
pub use pipeline::{Extraction, extract_monuments};
pub use record::{build_record, build_summary};
