//! Validation and recoding runtime.
//!
//! Applies a compiled [`ColumnSpec`] over the raw data table: per-row
//! valid/invalid classification, strict whole-column recoding, the
//! compound select-and-rename transform, and the failing-value
//! diagnostics helper.
//!
//! Classification and strict recoding are kept consistent by one rule:
//! classification treats any recode fault (cast failure or translation
//! lookup miss) as "this row is invalid", while strict recoding assumes
//! its input already passed classification, so the same fault propagates
//! as an error there.

use thiserror::Error;
use tracing::debug;

use redcap_ingest::{CsvTable, IngestError};
use redcap_model::{CellValue, ColumnDef, ColumnSpec, ColumnTransform, RecodeError};

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Recode(#[from] RecodeError),
}

pub type Result<T> = std::result::Result<T, ValidateError>;

/// A raw value that failed validation, keyed by its physical column and
/// original row index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedValue {
    pub column: String,
    pub row: usize,
    pub value: String,
}

/// Strictly recode one raw cell through the column's recoders, in
/// declared order.
pub fn recode_cell(def: &ColumnDef, raw: &str) -> std::result::Result<CellValue, RecodeError> {
    let mut value = CellValue::from_raw(raw);
    for recoder in &def.recoders {
        value = recoder.apply(&def.name, value)?;
    }
    Ok(value)
}

/// Classify one raw cell: recode faults count as invalid, then the
/// declared validators and the declared value type must both accept the
/// recoded value.
pub fn classify_cell(def: &ColumnDef, raw: &str) -> bool {
    let Ok(value) = recode_cell(def, raw) else {
        return false;
    };
    def.validators.iter().all(|validator| validator.check(&value))
        && value.conforms_to(def.value_type)
}

/// Per-row classification of one physical column. Row order matches the
/// table.
pub fn classify_column(table: &CsvTable, def: &ColumnDef) -> Result<Vec<bool>> {
    let cells = table.column(&def.name)?;
    Ok(cells.iter().map(|raw| classify_cell(def, raw)).collect())
}

/// Strictly recode one physical column to canonical values.
pub fn recode_column(table: &CsvTable, def: &ColumnDef) -> Result<Vec<CellValue>> {
    let cells = table.column(&def.name)?;
    cells
        .iter()
        .map(|raw| recode_cell(def, raw).map_err(ValidateError::from))
        .collect()
}

/// Apply a compound field's declared transform: select the prefixed
/// input columns and rename them to their canonical output names.
pub fn apply_transform(table: &CsvTable, transform: &ColumnTransform) -> CsvTable {
    table
        .select_prefixed(&transform.select_prefix)
        .renamed(&transform.renames)
}

/// Raw values that fail validation, preserving the original row index.
///
/// For compound specs every input column is checked; the result names
/// the physical column each failure came from.
pub fn failed_values(table: &CsvTable, spec: &ColumnSpec) -> Result<Vec<FailedValue>> {
    let defs: Vec<&ColumnDef> = match spec {
        ColumnSpec::Simple(def) => vec![def],
        ColumnSpec::Compound { input_columns, .. } => input_columns.iter().collect(),
    };
    let mut failed = Vec::new();
    for def in defs {
        let cells = table.column(&def.name)?;
        for (row, raw) in cells.iter().enumerate() {
            if !classify_cell(def, raw) {
                failed.push(FailedValue {
                    column: def.name.clone(),
                    row,
                    value: (*raw).to_string(),
                });
            }
        }
    }
    if !failed.is_empty() {
        debug!(count = failed.len(), "values failed validation");
    }
    Ok(failed)
}
