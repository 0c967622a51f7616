//! Data dictionary loading.

use std::path::Path;

use redcap_model::DictionaryRow;

use crate::csv_table::CsvTable;
use crate::error::{IngestError, Result};

const FIELD_NAME: &str = "Variable / Field Name";
const FORM_NAME: &str = "Form Name";
const SECTION_HEADER: &str = "Section Header";
const FIELD_TYPE: &str = "Field Type";
const FIELD_LABEL: &str = "Field Label";
const CHOICES: &str = "Choices, Calculations, OR Slider Labels";
const VALIDATION_KIND: &str = "Text Validation Type OR Show Slider Number";
const VALIDATION_MIN: &str = "Text Validation Min";
const VALIDATION_MAX: &str = "Text Validation Max";

/// Load a REDCap data dictionary export, one [`DictionaryRow`] per field,
/// in file order.
pub fn load_data_dictionary(path: &Path) -> Result<Vec<DictionaryRow>> {
    let table = CsvTable::from_path(path)?;
    dictionary_rows(&table)
}

/// Extract dictionary rows from an already-loaded table.
pub fn dictionary_rows(table: &CsvTable) -> Result<Vec<DictionaryRow>> {
    let require = |name: &'static str| {
        table
            .column_index(name)
            .ok_or(IngestError::MissingDictionaryColumn(name))
    };
    let field_name = require(FIELD_NAME)?;
    let form_name = require(FORM_NAME)?;
    let section_header = require(SECTION_HEADER)?;
    let field_type = require(FIELD_TYPE)?;
    let field_label = require(FIELD_LABEL)?;
    let choices = require(CHOICES)?;
    let validation_kind = require(VALIDATION_KIND)?;
    let validation_min = require(VALIDATION_MIN)?;
    let validation_max = require(VALIDATION_MAX)?;

    let cell = |row: &[String], idx: usize| row.get(idx).cloned().unwrap_or_default();
    Ok(table
        .rows
        .iter()
        .map(|row| DictionaryRow {
            field_name: cell(row, field_name),
            form_name: cell(row, form_name),
            section_header: cell(row, section_header),
            field_type: cell(row, field_type),
            field_label: cell(row, field_label),
            choices: cell(row, choices),
            validation_kind: cell(row, validation_kind),
            validation_min: cell(row, validation_min),
            validation_max: cell(row, validation_max),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary_table() -> CsvTable {
        CsvTable::new(
            vec![
                FIELD_NAME.into(),
                FORM_NAME.into(),
                SECTION_HEADER.into(),
                FIELD_TYPE.into(),
                FIELD_LABEL.into(),
                CHOICES.into(),
                VALIDATION_KIND.into(),
                VALIDATION_MIN.into(),
                VALIDATION_MAX.into(),
            ],
            vec![vec![
                "age".into(),
                "demographics".into(),
                String::new(),
                "text".into(),
                "Age".into(),
                String::new(),
                "integer".into(),
                "0".into(),
                "120".into(),
            ]],
        )
    }

    #[test]
    fn rows_map_headers_to_attributes() {
        let rows = dictionary_rows(&dictionary_table()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].field_name, "age");
        assert_eq!(rows[0].validation_kind, "integer");
        assert_eq!(rows[0].validation_max, "120");
    }

    #[test]
    fn missing_header_is_named() {
        let mut table = dictionary_table();
        table.headers[3] = "Type".into();
        let err = dictionary_rows(&table).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingDictionaryColumn("Field Type")
        ));
    }
}
