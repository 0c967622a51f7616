//! Field-type strategies: one column specification builder per field
//! type.
//!
//! Each strategy is a pure function from a field's attributes to its
//! [`ColumnSpec`]. Validators classify, recoders translate; an
//! out-of-domain value is a validation failure, while an unmapped value
//! reaching a recoder is a hard fault (see `redcap_model::Recoder`).

use redcap_model::{
    CellValue, ChoiceMap, ColumnDef, ColumnSpec, ColumnTransform, DateOrder, FieldType, Recoder,
    SchemaError, TranslationMap, ValidationKind, Validator, ValueType,
};

/// Separator between a checkbox field name and its option suffix in the
/// raw export's column names.
pub const CHECKBOX_SEP: &str = "___";

/// Dispatch on the field type and build the column specification.
pub fn build_column_spec(
    name: &str,
    field_type: FieldType,
    options_labels: Option<&ChoiceMap>,
    validation_kind: Option<ValidationKind>,
) -> Result<ColumnSpec, SchemaError> {
    let require_choices = || {
        options_labels.ok_or_else(|| SchemaError::MalformedChoices {
            field: name.to_string(),
        })
    };
    match field_type {
        FieldType::Radio | FieldType::Dropdown => Ok(radio_dropdown_column(name, require_choices()?)),
        FieldType::Checkbox => Ok(checkbox_columns(name, require_choices()?)),
        FieldType::YesNo => Ok(yesno_column(name)),
        FieldType::Text => Ok(text_column(name, validation_kind)),
        FieldType::Calc => Ok(calc_column(name)),
    }
}

/// Single-choice fields: value is the option code, recoded to its label.
fn radio_dropdown_column(name: &str, choices: &ChoiceMap) -> ColumnSpec {
    let mapping = TranslationMap::from_choices(choices);
    let mut members: Vec<CellValue> = mapping
        .labels()
        .map(|label| CellValue::Text(label.to_string()))
        .collect();
    members.push(CellValue::Missing);
    ColumnSpec::Simple(ColumnDef {
        name: name.to_string(),
        value_type: ValueType::Text,
        validators: vec![Validator::MemberOf(members)],
        recoders: vec![Recoder::Translate(mapping)],
    })
}

/// Checkbox fields: one input column per option code, one output column
/// per option label, connected by a select-and-rename transform.
fn checkbox_columns(name: &str, choices: &ChoiceMap) -> ColumnSpec {
    let flag_members = vec![
        CellValue::Flag(true),
        CellValue::Flag(false),
        CellValue::Missing,
    ];

    let input_columns: Vec<ColumnDef> = choices
        .codes()
        .map(|code| ColumnDef {
            name: format!("{name}{CHECKBOX_SEP}{code}"),
            value_type: ValueType::Flag,
            validators: vec![Validator::MemberOf(flag_members.clone())],
            recoders: vec![Recoder::ToIntOrMissing, Recoder::FlagFromInt],
        })
        .collect();

    let output_columns: Vec<ColumnDef> = choices
        .labels()
        .map(|label| ColumnDef {
            name: format!("{name}{CHECKBOX_SEP}{label}"),
            value_type: ValueType::Flag,
            validators: vec![Validator::MemberOf(flag_members.clone())],
            // Selection only; input columns already recoded.
            recoders: vec![],
        })
        .collect();

    let transform = ColumnTransform {
        select_prefix: format!("{name}{CHECKBOX_SEP}"),
        renames: choices
            .iter()
            .map(|(code, label)| {
                (
                    format!("{name}{CHECKBOX_SEP}{code}"),
                    format!("{name}{CHECKBOX_SEP}{label}"),
                )
            })
            .collect(),
    };

    ColumnSpec::Compound {
        input_columns,
        output_columns,
        transform,
    }
}

/// Yes/no fields carry a fixed `0`/`1` coding.
fn yesno_column(name: &str) -> ColumnSpec {
    let mapping = TranslationMap::new(vec![
        ("0".to_string(), "NO".to_string()),
        ("1".to_string(), "YES".to_string()),
    ]);
    let members = vec![
        CellValue::Text("NO".to_string()),
        CellValue::Text("YES".to_string()),
        CellValue::Missing,
    ];
    ColumnSpec::Simple(ColumnDef {
        name: name.to_string(),
        value_type: ValueType::Text,
        validators: vec![Validator::MemberOf(members)],
        recoders: vec![Recoder::Translate(mapping)],
    })
}

/// Text fields: declared type, validators and recoders all keyed by the
/// validation kind.
fn text_column(name: &str, kind: Option<ValidationKind>) -> ColumnSpec {
    let (value_type, validators, recoders) = match kind {
        Some(ValidationKind::Time) => (
            ValueType::Time,
            vec![Validator::IsTime],
            vec![Recoder::ToHourMinute],
        ),
        Some(ValidationKind::AlphaOnly) => (
            ValueType::Text,
            vec![Validator::IsAlpha],
            vec![Recoder::NullLikeToMissing],
        ),
        Some(kind @ (ValidationKind::DateYmd | ValidationKind::DateMdy | ValidationKind::DateDmy)) => {
            let order = kind.date_order().unwrap_or(DateOrder::YearMonthDay);
            (
                ValueType::Text,
                vec![Validator::DateFormat(order)],
                vec![Recoder::NullLikeToMissing],
            )
        }
        Some(ValidationKind::Integer) => (ValueType::Integer, vec![], vec![Recoder::CastInteger]),
        Some(
            ValidationKind::Number | ValidationKind::Number1dp | ValidationKind::Number4dp,
        ) => (ValueType::Float, vec![], vec![Recoder::CastFloat]),
        None => (ValueType::Text, vec![], vec![Recoder::NullLikeToMissing]),
    };
    ColumnSpec::Simple(ColumnDef {
        name: name.to_string(),
        value_type,
        validators,
        recoders,
    })
}

/// Calculated fields are numeric by construction.
fn calc_column(name: &str) -> ColumnSpec {
    ColumnSpec::Simple(ColumnDef {
        name: name.to_string(),
        value_type: ValueType::Float,
        validators: vec![Validator::IsFloat],
        recoders: vec![Recoder::CastFloat],
    })
}
