//! Error types shared across the schema compiler and runtime.

use thiserror::Error;

/// A raw value could not be converted to its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` could not be cast to {target}")]
pub struct CastError {
    /// The raw text that failed to cast.
    pub value: String,
    /// Human name of the target type (e.g. "integer", "date (ymd)").
    pub target: String,
}

impl CastError {
    pub fn new(value: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            target: target.into(),
        }
    }
}

/// A recode step failed on a value it was handed.
///
/// Recoders assume they run on values the column's validators already
/// accepted, so these faults indicate an upstream contract violation and
/// must propagate in strict recoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecodeError {
    #[error(transparent)]
    Cast(#[from] CastError),
    #[error("column `{column}`: value `{value}` has no entry in its translation mapping")]
    TranslationLookup { column: String, value: String },
}

/// Fatal dictionary authoring defects found during compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("field `{field}`: unrecognized field type `{value}`")]
    UnknownFieldType { field: String, value: String },
    #[error("field `{field}`: unrecognized text validation type `{value}`")]
    UnknownValidationKind { field: String, value: String },
    #[error("field `{field}`: choices string is missing or malformed for a field type that requires it")]
    MalformedChoices { field: String },
}
