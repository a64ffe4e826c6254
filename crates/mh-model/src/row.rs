//! Input row of the register, keyed by header name.

use std::collections::BTreeMap;

/// One register row: column name to cell text.
///
/// Cells are stored as read. Cells that are missing, empty or whitespace-only
/// are all reported as absent by the trimming accessors; [`Row::raw`] is the
/// only way to see a value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder-style insert, mostly for fixtures.
    #[must_use]
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.insert(column, value);
        self
    }

    /// Returns the trimmed cell value, or `None` when the column is missing
    /// or blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Returns the cell exactly as read, or an empty string when missing.
    pub fn raw(&self, column: &str) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    /// Returns the trimmed cell value or an empty string.
    pub fn text(&self, column: &str) -> &str {
        self.get(column).unwrap_or_default()
    }

    /// First non-empty value among `columns`, in order.
    pub fn first_non_empty(&self, columns: &[&str]) -> Option<&str> {
        columns.iter().find_map(|column| self.get(column))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_are_absent() {
        let row = Row::new().with("A", "").with("B", "x");
        assert_eq!(row.get("A"), None);
        assert_eq!(row.get("B"), Some("x"));
        assert_eq!(row.get("C"), None);
        assert_eq!(row.text("A"), "");
    }

    #[test]
    fn blank_cells_are_absent_but_raw_keeps_them() {
        let row = Row::new().with("A", "   ").with("B", " 1620 ");
        assert_eq!(row.get("A"), None);
        assert_eq!(row.get("B"), Some("1620"));
        assert_eq!(row.raw("B"), " 1620 ");
        assert_eq!(row.raw("C"), "");
    }

    #[test]
    fn first_non_empty_respects_order() {
        let row = Row::new().with("A", "").with("B", "b").with("C", "c");
        assert_eq!(row.first_non_empty(&["A", "B", "C"]), Some("b"));
        assert_eq!(row.first_non_empty(&["C", "B"]), Some("c"));
        assert_eq!(row.first_non_empty(&["A", "Z"]), None);
    }
}
