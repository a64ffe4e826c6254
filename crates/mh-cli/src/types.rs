use std::path::PathBuf;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub total_rows: usize,
    pub kept_rows: usize,
    pub excluded_rows: usize,
    pub unmatched_rows: usize,
    /// Records whose century fell back to the unknown placeholder.
    pub undated_records: usize,
    pub missing_columns: Vec<&'static str>,
}
