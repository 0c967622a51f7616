//! In-memory table of normalized string cells.
//!
//! The shared select/rename primitives live here so the compound-column
//! transform and the checkbox reshaper apply identical semantics.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use crate::error::{IngestError, Result};

/// A loaded table: normalized headers plus rows of string cells. Blank
/// cells denote absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Load a CSV file. Short rows are padded with blank cells and long
    /// rows truncated, with a warning.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();
        let width = headers.len();
        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(normalize_cell).collect();
            if row.len() != width {
                warn!(
                    row = idx + 1,
                    cells = row.len(),
                    expected = width,
                    "row width differs from header, padding/truncating"
                );
                row.resize(width, String::new());
            }
            rows.push(row);
        }
        Ok(Self { headers, rows })
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cells of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| IngestError::MissingColumn(name.to_string()))?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(idx).map_or("", String::as_str))
            .collect())
    }

    /// New table holding the given column indices, in the given order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        let headers = indices
            .iter()
            .filter_map(|&idx| self.headers.get(idx).cloned())
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&idx| row.get(idx).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }

    /// New table holding every column whose name starts with `prefix`,
    /// preserving column order.
    pub fn select_prefixed(&self, prefix: &str) -> Self {
        let indices: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| header.starts_with(prefix))
            .map(|(idx, _)| idx)
            .collect();
        self.subset(&indices)
    }

    /// New table with headers renamed per `renames`; unmatched headers
    /// keep their name.
    pub fn renamed(&self, renames: &[(String, String)]) -> Self {
        let headers = self
            .headers
            .iter()
            .map(|header| {
                renames
                    .iter()
                    .find(|(from, _)| from == header)
                    .map_or_else(|| header.clone(), |(_, to)| to.clone())
            })
            .collect();
        Self {
            headers,
            rows: self.rows.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CsvTable {
        CsvTable::new(
            vec!["subid".into(), "q1___1".into(), "q1___2".into(), "age".into()],
            vec![
                vec!["s1".into(), "1".into(), "0".into(), "34".into()],
                vec!["s2".into(), "0".into(), "1".into(), "41".into()],
            ],
        )
    }

    #[test]
    fn column_access() {
        let table = table();
        assert_eq!(table.column("age").unwrap(), ["34", "41"]);
        assert!(matches!(
            table.column("missing"),
            Err(IngestError::MissingColumn(_))
        ));
    }

    #[test]
    fn select_prefixed_keeps_order() {
        let selected = table().select_prefixed("q1___");
        assert_eq!(selected.headers, ["q1___1", "q1___2"]);
        assert_eq!(selected.rows[0], ["1", "0"]);
    }

    #[test]
    fn renamed_leaves_unmatched_headers() {
        let renamed = table().renamed(&[("q1___1".into(), "q1___Red".into())]);
        assert_eq!(renamed.headers, ["subid", "q1___Red", "q1___2", "age"]);
    }
}
