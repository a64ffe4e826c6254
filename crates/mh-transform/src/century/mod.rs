//! Century normalization.
//!
//! A row's century label comes from the first source in [`CENTURY_SOURCES`]
//! that yields one. Sources are never merged.

pub mod extract;
pub mod roman;

use mh_model::Row;
use mh_model::columns::{
    ABBREVIATED_CENTURY, BUILDING_DATING, PRIMARY_CAMPAIGN_CENTURY, SECONDARY_CAMPAIGN_CENTURY,
};
use tracing::trace;

pub use extract::{
    MAX_BARE_CENTURY, century_of_number, century_of_year, label_from_roman_text,
    label_from_years, numeric_centuries, render_label, roman_centuries,
};
pub use roman::{roman_to_int, to_roman};

/// Separator used when a source spans several columns.
pub const SOURCE_JOIN: &str = ";";

/// How a source's text is turned into centuries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Roman numerals, falling back to digits when none are present.
    RomanText,
    /// Digits only.
    NumericYears,
}

impl Extractor {
    pub fn label(self, text: &str) -> Option<String> {
        match self {
            Extractor::RomanText => label_from_roman_text(text),
            Extractor::NumericYears => label_from_years(text),
        }
    }
}

/// One attempt in the fallback chain.
#[derive(Debug, Clone, Copy)]
pub struct CenturySource {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub extractor: Extractor,
}

/// Fallback chain, highest priority first.
pub const CENTURY_SOURCES: &[CenturySource] = &[
    CenturySource {
        name: "abbreviated",
        columns: &[ABBREVIATED_CENTURY],
        extractor: Extractor::RomanText,
    },
    CenturySource {
        name: "campaigns",
        columns: &[PRIMARY_CAMPAIGN_CENTURY, SECONDARY_CAMPAIGN_CENTURY],
        extractor: Extractor::RomanText,
    },
    CenturySource {
        name: "dating",
        columns: &[BUILDING_DATING],
        extractor: Extractor::NumericYears,
    },
];

impl CenturySource {
    /// Non-empty cells of this source joined with [`SOURCE_JOIN`].
    pub fn text(&self, row: &Row) -> Option<String> {
        let parts: Vec<&str> = self
            .columns
            .iter()
            .filter_map(|column| row.get(column))
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(SOURCE_JOIN))
    }

    pub fn label(&self, row: &Row) -> Option<String> {
        self.text(row)
            .and_then(|text| self.extractor.label(&text))
    }
}

/// Century label for `row`, or `None` when every source comes up empty.
pub fn century_label(row: &Row) -> Option<String> {
    CENTURY_SOURCES.iter().find_map(|source| {
        let label = source.label(row)?;
        trace!(source = source.name, label = %label, "century resolved");
        Some(label)
    })
}

/// Century label for `row` with the `Datation inconnue` placeholder.
pub fn century_label_or_unknown(row: &Row) -> String {
    century_label(row).unwrap_or_else(|| mh_model::UNKNOWN_DATING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviated_field_wins() {
        let row = Row::new()
            .with(ABBREVIATED_CENTURY, "XVIe s.")
            .with(PRIMARY_CAMPAIGN_CENTURY, "12e siècle")
            .with(BUILDING_DATING, "1850");
        assert_eq!(century_label(&row).as_deref(), Some("XVIe"));
    }

    #[test]
    fn campaigns_are_joined() {
        let row = Row::new()
            .with(PRIMARY_CAMPAIGN_CENTURY, "12e siècle")
            .with(SECONDARY_CAMPAIGN_CENTURY, "15e siècle");
        let source = &CENTURY_SOURCES[1];
        assert_eq!(
            source.text(&row).as_deref(),
            Some("12e siècle;15e siècle")
        );
        assert_eq!(century_label(&row).as_deref(), Some("XIIe–XVe"));
    }

    #[test]
    fn undecodable_abbreviation_falls_through() {
        // no Roman token and no digit: first source yields nothing
        let row = Row::new()
            .with(ABBREVIATED_CENTURY, "inconnu")
            .with(BUILDING_DATING, "1620");
        assert_eq!(century_label(&row).as_deref(), Some("XVIIe"));
    }

    #[test]
    fn dating_skips_roman_extraction() {
        // "MDC" would be read as 1600 by the Roman extractor
        let row = Row::new().with(BUILDING_DATING, "MDC");
        assert_eq!(century_label(&row), None);
    }

    #[test]
    fn unknown_placeholder() {
        assert_eq!(century_label_or_unknown(&Row::new()), "Datation inconnue");
    }
}
