//! CSV header row handling.

/// Header row of the register export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Column names, whitespace-trimmed, in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// True when at least one of `alternatives` is present.
    pub fn contains_any(&self, alternatives: &[&str]) -> bool {
        alternatives.iter().any(|column| self.contains(column))
    }

    /// Returns the column groups for which no alternative is present.
    ///
    /// Each group is a fallback list; a group is reported by its first name.
    pub fn missing<'a>(&self, groups: &[&'a [&'a str]]) -> Vec<&'a str> {
        groups
            .iter()
            .filter(|group| !self.contains_any(group))
            .filter_map(|group| group.first().copied())
            .collect()
    }
}

/// Normalizes a header value by trimming whitespace.
///
/// A leading BOM is not whitespace and is kept.
pub fn normalize_header(value: &str) -> String {
    value.trim().to_string()
}
