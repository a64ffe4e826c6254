//! Extraction pipeline with explicit stages.
//!
//! 1. **Ingest**: read the register export and check its header row
//! 2. **Transform**: classify rows and build records for the kept ones
//! 3. **Output**: serialize the records as one JSON document
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use mh_ingest::{RegisterTable, read_register};
use mh_model::columns::EXPECTED_COLUMN_GROUPS;
use mh_model::write_json;
use mh_transform::{Extraction, extract_monuments};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    pub table: RegisterTable,
    /// Column groups with no alternative present, by first name.
    pub missing_columns: Vec<&'static str>,
}

/// Load the register and report absent columns.
///
/// Absent columns are a warning only; rows then degrade to their
/// "no match" and "not found" branches.
pub fn ingest(path: &Path) -> Result<IngestResult> {
    let span = info_span!("ingest", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_register(path).context("read register")?;
    let missing_columns = table.headers.missing(EXPECTED_COLUMN_GROUPS);
    for column in &missing_columns {
        warn!(column = %column, "register column not found");
    }

    info!(
        column_count = table.headers.len(),
        row_count = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(IngestResult {
        table,
        missing_columns,
    })
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

/// Classify every row and map the retained ones.
pub fn transform(table: &RegisterTable) -> Extraction {
    let span = info_span!("transform", row_count = table.len());
    let _guard = span.enter();
    let start = Instant::now();

    let extraction = extract_monuments(&table.rows);

    info!(
        total_rows = extraction.total_rows,
        kept_rows = extraction.kept_rows(),
        excluded_rows = extraction.excluded_rows,
        unmatched_rows = extraction.unmatched_rows,
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    extraction
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write the records as a pretty-printed JSON array.
///
/// The whole document is serialized before the file is created, so a failure
/// never leaves a truncated file behind. Returns `None` on a dry run.
pub fn output(path: &Path, extraction: &Extraction, dry_run: bool) -> Result<Option<PathBuf>> {
    let span = info_span!("output", path = %path.display());
    let _guard = span.enter();

    if dry_run {
        info!(
            record_count = extraction.kept_rows(),
            "output skipped (dry run)"
        );
        return Ok(None);
    }

    let mut buffer = Vec::new();
    write_json(&mut buffer, &extraction.records).context("serialize records")?;
    std::fs::write(path, buffer).with_context(|| format!("write {}", path.display()))?;

    info!(record_count = extraction.kept_rows(), "output written");
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let written = output(&path, &Extraction::default(), true).unwrap();

        assert!(written.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn empty_extraction_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        output(&path, &Extraction::default(), false).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]\n");
    }
}
