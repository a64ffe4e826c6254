//! Run configuration.

use std::path::PathBuf;

/// Register export read when no `--input` is given.
pub const DEFAULT_INPUT_CSV: &str = "immeubles_mh.csv";

/// Document written when no `--output` is given.
pub const DEFAULT_OUTPUT_JSON: &str = "chateaux.json";

/// Paths and switches for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Classify and report without writing the output document.
    pub dry_run: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_CSV),
            output: PathBuf::from(DEFAULT_OUTPUT_JSON),
            dry_run: false,
        }
    }
}
