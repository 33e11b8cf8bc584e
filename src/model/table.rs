//! Table types.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A table with an optional header, data rows and footnotes.
///
/// Rows are stored as already-formatted cell strings; any `Display` value can
/// be appended with [`Table::add_row`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column headers
    pub header: Option<Vec<String>>,

    /// Data rows
    pub rows: Vec<Vec<String>>,

    /// Footnotes rendered below the grid
    pub footnotes: Vec<String>,

    /// Table title
    pub title: Option<String>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with a header row.
    pub fn with_header<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        let mut table = Self::new();
        table.set_header(header);
        table
    }

    /// Set the title and return self.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the header row.
    pub fn set_header<S: Into<String>>(&mut self, header: impl IntoIterator<Item = S>) {
        self.header = Some(header.into_iter().map(Into::into).collect());
    }

    /// Append a data row.
    pub fn add_row<T: Display>(&mut self, row: impl IntoIterator<Item = T>) {
        self.rows
            .push(row.into_iter().map(|cell| cell.to_string()).collect());
    }

    /// Append a footnote.
    pub fn add_footnote(&mut self, text: impl Into<String>) {
        self.footnotes.push(text.into());
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (widest of header and rows).
    pub fn column_count(&self) -> usize {
        let header = self.header.as_ref().map(Vec::len).unwrap_or(0);
        self.rows.iter().map(Vec::len).fold(header, usize::max)
    }

    /// Check if the table has neither header nor rows.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_table_with_data() {
        let mut table = Table::with_header(["Name", "Age"]);
        table.add_row(["Alice", "30"]);
        table.add_row(vec![1.5, 2.0, 3.25]);
        table.add_footnote("Ages as of 2020");

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.rows[1], vec!["1.5", "2", "3.25"]);
        assert_eq!(table.footnotes, vec!["Ages as of 2020"]);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_duplicate_rows_allowed() {
        let mut table = Table::new().titled("Dupes");
        table.add_row(["a"]);
        table.add_row(["a"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.title.as_deref(), Some("Dupes"));
    }
}
