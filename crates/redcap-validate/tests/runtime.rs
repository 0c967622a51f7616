#![allow(missing_docs)]

use redcap_ingest::CsvTable;
use redcap_model::{CellValue, ColumnDef, ColumnSpec, DictionaryRow, RecodeError};
use redcap_schema::compile;
use redcap_validate::{
    FailedValue, apply_transform, classify_cell, classify_column, failed_values, recode_cell,
    recode_column,
};

fn compiled_spec(row: DictionaryRow) -> ColumnSpec {
    let schema = compile(&[row]).expect("test dictionary compiles");
    schema.iter().next().unwrap().column_spec.clone()
}

fn simple_def(row: DictionaryRow) -> ColumnDef {
    match compiled_spec(row) {
        ColumnSpec::Simple(def) => def,
        ColumnSpec::Compound { .. } => panic!("expected a simple spec"),
    }
}

fn yesno_def() -> ColumnDef {
    simple_def(DictionaryRow {
        field_name: "consented".into(),
        field_type: "yesno".into(),
        ..DictionaryRow::default()
    })
}

#[test]
fn yesno_recode_domain() {
    let def = yesno_def();
    assert_eq!(recode_cell(&def, "1").unwrap(), CellValue::Text("YES".into()));
    assert_eq!(recode_cell(&def, "0").unwrap(), CellValue::Text("NO".into()));
    assert_eq!(recode_cell(&def, "").unwrap(), CellValue::Missing);
    assert_eq!(
        recode_cell(&def, "2").unwrap_err(),
        RecodeError::TranslationLookup {
            column: "consented".into(),
            value: "2".into(),
        }
    );
}

#[test]
fn yesno_classification_agrees_with_recode() {
    let def = yesno_def();
    assert!(classify_cell(&def, "1"));
    assert!(classify_cell(&def, ""));
    // The same value that faults strict recoding is simply invalid here.
    assert!(!classify_cell(&def, "2"));
}

#[test]
fn radio_recodes_code_to_label() {
    let def = simple_def(DictionaryRow {
        field_name: "color".into(),
        field_type: "radio".into(),
        choices: "1, Red | 2, Blue".into(),
        ..DictionaryRow::default()
    });
    assert_eq!(recode_cell(&def, "1").unwrap(), CellValue::Text("Red".into()));
    assert_eq!(recode_cell(&def, "2").unwrap(), CellValue::Text("Blue".into()));
    assert!(recode_cell(&def, "3").is_err());
}

#[test]
fn integer_text_is_classified_not_faulted() {
    let def = simple_def(DictionaryRow {
        field_name: "age".into(),
        field_type: "text".into(),
        validation_kind: "integer".into(),
        ..DictionaryRow::default()
    });
    assert!(classify_cell(&def, "34"));
    assert!(classify_cell(&def, ""));
    assert!(!classify_cell(&def, "abc"));

    let table = CsvTable::new(
        vec!["age".into()],
        vec![vec!["34".into()], vec!["abc".into()], vec![String::new()]],
    );
    assert_eq!(classify_column(&table, &def).unwrap(), [true, false, true]);
}

#[test]
fn recode_column_produces_canonical_values() {
    let def = simple_def(DictionaryRow {
        field_name: "age".into(),
        field_type: "text".into(),
        validation_kind: "integer".into(),
        ..DictionaryRow::default()
    });
    let table = CsvTable::new(
        vec!["age".into()],
        vec![vec!["34".into()], vec![String::new()], vec!["41".into()]],
    );
    assert_eq!(
        recode_column(&table, &def).unwrap(),
        [
            CellValue::Integer(34),
            CellValue::Missing,
            CellValue::Integer(41),
        ]
    );
}

#[test]
fn failed_values_preserve_row_index() {
    let def = yesno_def();
    let table = CsvTable::new(
        vec!["consented".into()],
        vec![
            vec!["1".into()],
            vec!["2".into()],
            vec!["0".into()],
            vec!["maybe".into()],
        ],
    );
    let failed = failed_values(&table, &ColumnSpec::Simple(def)).unwrap();
    assert_eq!(
        failed,
        [
            FailedValue {
                column: "consented".into(),
                row: 1,
                value: "2".into(),
            },
            FailedValue {
                column: "consented".into(),
                row: 3,
                value: "maybe".into(),
            },
        ]
    );
}

#[test]
fn checkbox_transform_selects_and_renames() {
    let spec = compiled_spec(DictionaryRow {
        field_name: "q1".into(),
        field_type: "checkbox".into(),
        choices: "1, Red | 2, Blue".into(),
        ..DictionaryRow::default()
    });
    let ColumnSpec::Compound {
        input_columns,
        transform,
        ..
    } = &spec
    else {
        panic!("checkbox compiles to a compound spec");
    };

    let table = CsvTable::new(
        vec!["subid".into(), "q1___1".into(), "q1___2".into()],
        vec![vec!["s1".into(), "1".into(), "0".into()]],
    );
    let canonical = apply_transform(&table, transform);
    assert_eq!(canonical.headers, ["q1___Red", "q1___Blue"]);
    assert_eq!(canonical.rows[0], ["1", "0"]);

    // Input columns recode 0/1/blank to flags.
    let red = &input_columns[0];
    assert_eq!(recode_cell(red, "1").unwrap(), CellValue::Flag(true));
    assert_eq!(recode_cell(red, "0").unwrap(), CellValue::Flag(false));
    assert_eq!(recode_cell(red, "").unwrap(), CellValue::Missing);
    assert!(recode_cell(red, "2").is_err());
    assert!(!classify_cell(red, "2"));
}

#[test]
fn checkbox_failed_values_cover_all_input_columns() {
    let spec = compiled_spec(DictionaryRow {
        field_name: "q1".into(),
        field_type: "checkbox".into(),
        choices: "1, Red | 2, Blue".into(),
        ..DictionaryRow::default()
    });
    let table = CsvTable::new(
        vec!["q1___1".into(), "q1___2".into()],
        vec![
            vec!["1".into(), "7".into()],
            vec!["0".into(), "1".into()],
        ],
    );
    let failed = failed_values(&table, &spec).unwrap();
    assert_eq!(
        failed,
        [FailedValue {
            column: "q1___2".into(),
            row: 0,
            value: "7".into(),
        }]
    );
}
