//! Checkbox reshaping: wide one-hot option columns to a long
//! one-row-per-(subject, selected-option) frame.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, NamedFrom, PolarsError, Series};
use thiserror::Error;
use tracing::debug;

use redcap_ingest::CsvTable;
use redcap_schema::{CHECKBOX_SEP, Schema};

#[derive(Debug, Error)]
pub enum ReshapeError {
    #[error("raw table has no subject-id column named `{0}`")]
    MissingIdColumn(String),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, ReshapeError>;

/// Reshape one checkbox field's wide columns into a long answer frame.
///
/// Selects the subject-id column plus every column named
/// `{field_name}{sep}*`, drops rows with any missing value in that
/// selection, keeps one row per selected (subject, option) pair sorted
/// by subject id, and emits two columns: the id column and `field_name`
/// holding the option-code suffix (text after the last `sep`).
pub fn build_checkbox_frame(
    table: &CsvTable,
    id_column: &str,
    field_name: &str,
    sep: &str,
) -> Result<DataFrame> {
    let id_idx = table
        .column_index(id_column)
        .ok_or_else(|| ReshapeError::MissingIdColumn(id_column.to_string()))?;

    // Same selection primitives the compound transform uses.
    let prefix = format!("{field_name}{sep}");
    let mut indices = vec![id_idx];
    indices.extend(
        table
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| header.starts_with(&prefix))
            .map(|(idx, _)| idx),
    );
    let selected = table.subset(&indices);
    let suffixes: Vec<String> = selected.headers[1..]
        .iter()
        .map(|header| answer_suffix(header, sep))
        .collect();

    let mut pairs: Vec<(String, String)> = Vec::new();
    for row in &selected.rows {
        let id = row.first().map_or("", String::as_str).trim();
        let Some(flags) = row_selection_flags(&row[1..], id) else {
            continue;
        };
        for (suffix, selected) in suffixes.iter().zip(flags) {
            if selected {
                pairs.push((id.to_string(), suffix.clone()));
            }
        }
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let (ids, answers): (Vec<String>, Vec<String>) = pairs.into_iter().unzip();
    let columns = vec![
        Series::new(id_column.into(), ids).into(),
        Series::new(field_name.into(), answers).into(),
    ];
    Ok(DataFrame::new(columns)?)
}

/// Flags for one row's option cells, or `None` when the row has a
/// missing value anywhere in the selection and must be dropped.
fn row_selection_flags(option_cells: &[String], id: &str) -> Option<Vec<bool>> {
    if id.is_empty() {
        return None;
    }
    option_cells
        .iter()
        .map(|cell| selection_flag(cell))
        .collect()
}

/// Truthiness of a wide cell. Anything other than a recognizable flag
/// counts as missing.
fn selection_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

fn answer_suffix(header: &str, sep: &str) -> String {
    header
        .rsplit(sep)
        .next()
        .unwrap_or(header)
        .to_string()
}

/// Build one long answer frame per checkbox field in the compiled
/// schema.
pub fn process_checkboxes(
    table: &CsvTable,
    schema: &Schema,
    id_column: &str,
) -> Result<BTreeMap<String, DataFrame>> {
    let mut frames = BTreeMap::new();
    for field_name in schema.checkbox_fields() {
        let frame = build_checkbox_frame(table, id_column, field_name, CHECKBOX_SEP)?;
        debug!(field = field_name, rows = frame.height(), "reshaped checkbox field");
        frames.insert(field_name.to_string(), frame);
    }
    Ok(frames)
}
