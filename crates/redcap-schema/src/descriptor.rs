//! Field descriptors: one normalized, compiled description per
//! dictionary row.

use std::str::FromStr;

use redcap_model::{
    CastFallback, CellValue, ChoiceMap, ColumnSpec, DictionaryRow, FieldType, SchemaError,
    ValidationKind, cast_bound,
};

use crate::choices::parse_choices;
use crate::strategies;

/// A fully compiled description of one data-bearing field.
///
/// `column_spec` is a pure function of the other attributes: construction
/// either populates it completely or fails with a [`SchemaError`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub form_name: String,
    pub section_header: String,
    pub field_label: String,
    pub field_type: FieldType,
    /// Ordered option code to label mapping; `None` when the choices
    /// string is absent or unparsable.
    pub options_labels: Option<ChoiceMap>,
    pub validation_kind: Option<ValidationKind>,
    /// Declared bounds, recast into the type `validation_kind` implies,
    /// degraded to verbatim text when the cast fails.
    pub validation_min: CellValue,
    pub validation_max: CellValue,
    pub column_spec: ColumnSpec,
}

impl FieldDescriptor {
    pub fn from_row(row: &DictionaryRow) -> Result<Self, SchemaError> {
        let name = row.field_name.trim().to_string();
        let field_type = FieldType::from_str(&row.field_type).map_err(|value| {
            SchemaError::UnknownFieldType {
                field: name.clone(),
                value,
            }
        })?;
        let validation_kind = ValidationKind::parse_opt(&name, &row.validation_kind)?;
        let options_labels = parse_choices(&row.choices);
        let validation_min =
            cast_bound(&row.validation_min, validation_kind, CastFallback::StringVerbatim);
        let validation_max =
            cast_bound(&row.validation_max, validation_kind, CastFallback::StringVerbatim);

        let column_spec = strategies::build_column_spec(
            &name,
            field_type,
            options_labels.as_ref(),
            validation_kind,
        )?;

        Ok(Self {
            name,
            form_name: row.form_name.clone(),
            section_header: row.section_header.clone(),
            field_label: row.field_label.clone(),
            field_type,
            options_labels,
            validation_kind,
            validation_min,
            validation_max,
            column_spec,
        })
    }
}
