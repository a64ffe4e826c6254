//! Single-pass extraction over register rows.

use mh_model::{MonumentRecord, Row};
use tracing::trace;

use crate::classifier::{Decision, classify_row};
use crate::record::build_record;

/// Records kept from one run plus the counters reported at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub records: Vec<MonumentRecord>,
    /// Every row seen.
    pub total_rows: usize,
    /// Rows dropped by an exclusion keyword.
    pub excluded_rows: usize,
    /// Rows dropped for lack of any inclusion keyword.
    pub unmatched_rows: usize,
}

impl Extraction {
    pub fn kept_rows(&self) -> usize {
        self.records.len()
    }

    fn push_row(&mut self, row: &Row) {
        self.total_rows += 1;
        let decision = classify_row(row);
        trace!(row = self.total_rows, ?decision, "row classified");
        match decision {
            Decision::Excluded { .. } => self.excluded_rows += 1,
            Decision::NoMatch => self.unmatched_rows += 1,
            Decision::Included { .. } | Decision::IncludedByDomain { .. } => {
                let kept = self.records.len() + 1;
                self.records.push(build_record(row, kept));
            }
        }
    }
}

/// Classifies every row in source order and maps the kept ones.
pub fn extract_monuments<'a, I>(rows: I) -> Extraction
where
    I: IntoIterator<Item = &'a Row>,
{
    rows.into_iter()
        .fold(Extraction::default(), |mut extraction, row| {
            extraction.push_row(row);
            extraction
        })
}
