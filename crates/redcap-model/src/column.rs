//! Column specifications: declared types plus ordered validator and
//! recoder steps.
//!
//! Validators are predicates classifying a value as well-formed; recoders
//! are pure transforms from a captured value to its canonical form. Both
//! are closed enums so the runtime can apply them generically and a
//! compiled schema stays inspectable data.

use serde::{Deserialize, Serialize};

use crate::cast::{as_date, as_float, as_integer, as_time};
use crate::choices::ChoiceMap;
use crate::enums::DateOrder;
use crate::error::RecodeError;
use crate::value::{CellValue, ValueType, is_null_like};

/// Translation mapping used by [`Recoder::Translate`].
///
/// `Missing` maps to `Missing` by an explicit rule; it is the only value
/// excluded from lookup. Any other unmapped value is a hard fault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationMap {
    entries: Vec<(String, String)>,
}

impl TranslationMap {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Build the radio/dropdown mapping: every option code to its label.
    pub fn from_choices(choices: &ChoiceMap) -> Self {
        Self {
            entries: choices
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, label)| label.as_str())
    }

    /// Translated label set, for building membership validators.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, label)| label.as_str())
    }

    fn translate(&self, column: &str, value: &CellValue) -> Result<CellValue, RecodeError> {
        match value {
            CellValue::Missing => Ok(CellValue::Missing),
            CellValue::Text(code) => match self.get(code) {
                Some(label) => Ok(CellValue::Text(label.to_string())),
                None => Err(RecodeError::TranslationLookup {
                    column: column.to_string(),
                    value: code.clone(),
                }),
            },
            other => Err(RecodeError::TranslationLookup {
                column: column.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// A named, pure predicate over a (possibly recoded) cell value.
///
/// `Missing` is accepted by every validator; absence is always legal and
/// is excluded from membership and shape checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Validator {
    /// Value must be one of the listed members.
    MemberOf(Vec<CellValue>),
    /// Value must be time-shaped.
    IsTime,
    /// Value must be purely alphabetic text.
    IsAlpha,
    /// Value must be a date in the declared component order.
    DateFormat(DateOrder),
    /// Value must be a valid floating-point number.
    IsFloat,
}

impl Validator {
    pub fn check(&self, value: &CellValue) -> bool {
        if value.is_missing() {
            return match self {
                Self::MemberOf(members) => members.contains(&CellValue::Missing),
                _ => true,
            };
        }
        match self {
            Self::MemberOf(members) => members.contains(value),
            Self::IsTime => match value {
                CellValue::Time(_) => true,
                CellValue::Text(raw) => as_time(raw).is_ok(),
                _ => false,
            },
            Self::IsAlpha => match value {
                CellValue::Text(raw) => {
                    !raw.is_empty() && raw.chars().all(char::is_alphabetic)
                }
                _ => false,
            },
            Self::DateFormat(order) => match value {
                CellValue::Date(_) => true,
                CellValue::Text(raw) => as_date(raw, *order).is_ok(),
                _ => false,
            },
            Self::IsFloat => match value {
                CellValue::Float(_) | CellValue::Integer(_) => true,
                CellValue::Text(raw) => as_float(raw).is_ok(),
                _ => false,
            },
        }
    }
}

/// A named, pure transform from a captured value to its canonical form.
///
/// Recoders run in declared order; each consumes the previous step's
/// output. Faults assume the value already passed validation, so they
/// indicate a contract violation upstream and propagate in strict
/// recoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Recoder {
    /// Map a raw code to its label through a translation mapping.
    Translate(TranslationMap),
    /// Coerce numeric-looking text to an integer; anything else becomes
    /// `Missing`. Never faults.
    ToIntOrMissing,
    /// Map integer `0`/`1` to a boolean flag; any other integer is an
    /// unmapped-value fault.
    FlagFromInt,
    /// Cast to a clock time at hour:minute precision.
    ToHourMinute,
    /// Cast text to an integer; null-like text becomes `Missing`.
    CastInteger,
    /// Cast text to a float; null-like text becomes `Missing`.
    CastFloat,
    /// Map null-like text to `Missing`, pass everything else through.
    NullLikeToMissing,
}

impl Recoder {
    pub fn apply(&self, column: &str, value: CellValue) -> Result<CellValue, RecodeError> {
        match self {
            Self::Translate(mapping) => mapping.translate(column, &value),
            Self::ToIntOrMissing => Ok(to_int_or_missing(value)),
            Self::FlagFromInt => flag_from_int(column, value),
            Self::ToHourMinute => to_hour_minute(value),
            Self::CastInteger => cast_integer(value),
            Self::CastFloat => cast_float(value),
            Self::NullLikeToMissing => Ok(null_like_to_missing(value)),
        }
    }
}

fn to_int_or_missing(value: CellValue) -> CellValue {
    match value {
        CellValue::Integer(n) => CellValue::Integer(n),
        CellValue::Float(x) => CellValue::Integer(x as i64),
        CellValue::Flag(b) => CellValue::Integer(i64::from(b)),
        CellValue::Text(raw) => {
            if let Ok(n) = as_integer(&raw) {
                CellValue::Integer(n)
            } else if let Ok(x) = as_float(&raw) {
                CellValue::Integer(x as i64)
            } else {
                CellValue::Missing
            }
        }
        _ => CellValue::Missing,
    }
}

fn flag_from_int(column: &str, value: CellValue) -> Result<CellValue, RecodeError> {
    match value {
        CellValue::Missing => Ok(CellValue::Missing),
        CellValue::Integer(0) => Ok(CellValue::Flag(false)),
        CellValue::Integer(1) => Ok(CellValue::Flag(true)),
        CellValue::Flag(b) => Ok(CellValue::Flag(b)),
        other => Err(RecodeError::TranslationLookup {
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}

fn to_hour_minute(value: CellValue) -> Result<CellValue, RecodeError> {
    match value {
        CellValue::Missing => Ok(CellValue::Missing),
        CellValue::Time(t) => Ok(CellValue::Time(truncate_to_minute(t))),
        CellValue::Text(raw) => {
            let time = as_time(&raw)?;
            Ok(CellValue::Time(truncate_to_minute(time)))
        }
        other => Err(crate::error::CastError::new(other.to_string(), "time").into()),
    }
}

fn truncate_to_minute(time: chrono::NaiveTime) -> chrono::NaiveTime {
    use chrono::Timelike;
    chrono::NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

fn cast_integer(value: CellValue) -> Result<CellValue, RecodeError> {
    match value {
        CellValue::Missing => Ok(CellValue::Missing),
        CellValue::Integer(n) => Ok(CellValue::Integer(n)),
        CellValue::Text(raw) if is_null_like(&raw) => Ok(CellValue::Missing),
        CellValue::Text(raw) => Ok(CellValue::Integer(as_integer(&raw)?)),
        other => Err(crate::error::CastError::new(other.to_string(), "integer").into()),
    }
}

fn cast_float(value: CellValue) -> Result<CellValue, RecodeError> {
    match value {
        CellValue::Missing => Ok(CellValue::Missing),
        CellValue::Float(x) => Ok(CellValue::Float(x)),
        CellValue::Integer(n) => Ok(CellValue::Float(n as f64)),
        CellValue::Text(raw) if is_null_like(&raw) => Ok(CellValue::Missing),
        CellValue::Text(raw) => Ok(CellValue::Float(as_float(&raw)?)),
        other => Err(crate::error::CastError::new(other.to_string(), "number").into()),
    }
}

fn null_like_to_missing(value: CellValue) -> CellValue {
    match value {
        CellValue::Text(raw) if is_null_like(&raw) => CellValue::Missing,
        other => other,
    }
}

/// Specification of one physical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub value_type: ValueType,
    pub validators: Vec<Validator>,
    pub recoders: Vec<Recoder>,
}

/// Declared select-and-rename transform of a compound field.
///
/// Selects every physical column whose name starts with `select_prefix`
/// and renames each per `renames`. Pure data; applied by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTransform {
    pub select_prefix: String,
    pub renames: Vec<(String, String)>,
}

/// Compiled specification of one logical field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnSpec {
    /// One logical field backed by one physical column.
    Simple(ColumnDef),
    /// One logical field backed by N physical columns, as in checkbox
    /// fields exploded one column per option.
    Compound {
        input_columns: Vec<ColumnDef>,
        output_columns: Vec<ColumnDef>,
        transform: ColumnTransform,
    },
}

impl ColumnSpec {
    /// Raw input column names this spec reads.
    pub fn input_column_names(&self) -> Vec<&str> {
        match self {
            Self::Simple(def) => vec![def.name.as_str()],
            Self::Compound { input_columns, .. } => {
                input_columns.iter().map(|def| def.name.as_str()).collect()
            }
        }
    }

    /// Canonical output column names this spec produces.
    pub fn output_column_names(&self) -> Vec<&str> {
        match self {
            Self::Simple(def) => vec![def.name.as_str()],
            Self::Compound { output_columns, .. } => {
                output_columns.iter().map(|def| def.name.as_str()).collect()
            }
        }
    }
}
