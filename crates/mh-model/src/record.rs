//! Output record written for every retained monument.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name used when neither the editorial title nor the denomination is set.
pub const UNTITLED: &str = "Sans titre";

/// Century label used when no dating source yields a century.
pub const UNKNOWN_DATING: &str = "Datation inconnue";

/// Prefix of identifiers generated for rows without a reference.
pub const GENERATED_ID_PREFIX: &str = "mh-";

/// WGS84 position of a monument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One retained monument.
///
/// Field order is the key order of the JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonumentRecord {
    pub id: String,
    pub nom: String,
    pub commune: String,
    pub departement: String,
    pub region: String,
    /// Building dating text exactly as read, surrounding whitespace included.
    pub datation: String,
    /// Century label such as `XVIe` or `XVIe–XIXe`, or [`UNKNOWN_DATING`].
    pub siecles: String,
    pub resume_historique: Option<String>,
    pub coordonnees: Option<Coordinates>,
}

/// Generated identifier for the `kept`-th retained row (1-based).
pub fn generated_id(kept: usize) -> String {
    format!("{GENERATED_ID_PREFIX}{kept}")
}

/// Write records as a pretty-printed JSON array followed by a newline.
///
/// Non-ASCII characters are written as-is.
pub fn write_json<W: Write>(mut writer: W, records: &[MonumentRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
