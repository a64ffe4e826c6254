//! Register export reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use mh_model::Row;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, normalize_header};

/// Field delimiter of the register export.
pub const REGISTER_DELIMITER: u8 = b';';

/// Fully loaded register: header row plus every data row in file order.
#[derive(Debug, Clone, Default)]
pub struct RegisterTable {
    pub headers: CsvHeaders,
    pub rows: Vec<Row>,
}

/// Reads a semicolon-delimited register export.
///
/// Fails with [`IngestError::FileNotFound`] before opening anything when
/// `path` is not a regular file. An empty file yields an empty table with a
/// warning. Cell values are stored as read; rows shorter than the header leave
/// the trailing columns absent, extra cells are ignored.
pub fn read_register(path: &Path) -> Result<RegisterTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_register_from(file, path)
}

fn read_register_from<R: Read>(source: R, path: &Path) -> Result<RegisterTable> {
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(REGISTER_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    if columns.is_empty() {
        warn!(path = %path.display(), "register is empty");
        return Ok(RegisterTable::default());
    }
    if columns.iter().all(String::is_empty) {
        warn!(path = %path.display(), "register header row is blank");
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let row: Row = columns
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.clone(), value.to_string()))
            .collect();
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "register loaded"
    );

    Ok(RegisterTable {
        headers: CsvHeaders::new(columns),
        rows,
    })
}

impl RegisterTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
