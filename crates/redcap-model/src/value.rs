//! Typed cell values and declared column types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One captured-or-canonical value of a data cell.
///
/// `Missing` is the single canonical representation of "no value captured"
/// across all declared types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Time(NaiveTime),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Whether this value inhabits the declared type. `Missing` is legal
    /// for every type.
    pub fn conforms_to(&self, value_type: ValueType) -> bool {
        match (self, value_type) {
            (Self::Missing, _) => true,
            (Self::Text(_), ValueType::Text) => true,
            (Self::Integer(_), ValueType::Integer) => true,
            (Self::Float(_), ValueType::Float) => true,
            (Self::Flag(_), ValueType::Flag) => true,
            (Self::Time(_), ValueType::Time) => true,
            (Self::Date(_), ValueType::Date) => true,
            _ => false,
        }
    }

    /// Wrap a raw cell, mapping null-like text to `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        if is_null_like(raw) {
            Self::Missing
        } else {
            Self::Text(raw.trim().to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str(""),
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Time(t) => write!(f, "{}", t.format("%H:%M")),
            Self::Date(d) => write!(f, "{d}"),
        }
    }
}

/// Declared value type of a column. Every type additionally admits
/// [`CellValue::Missing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Text,
    Integer,
    Float,
    Flag,
    Time,
    Date,
}

/// Whether a raw cell denotes an absent value.
///
/// Only a blank cell is absent. Spellings such as `N/A` are real captured
/// text and must survive verbatim (dictionary bounds rely on this).
pub fn is_null_like(raw: &str) -> bool {
    raw.trim().is_empty()
}
