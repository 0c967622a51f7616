//! Type-safe enumerations for data dictionary metadata.
//!
//! REDCap dictionaries carry field types and text-validation kinds as free
//! strings. Parsing them into closed enums makes an unrecognized variant a
//! hard authoring error instead of a silent runtime key miss.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Raw dictionary value marking a row that carries no data.
///
/// Rows of this type are dropped before compilation and never reach
/// [`FieldType::from_str`].
pub const DESCRIPTIVE: &str = "descriptive";

/// The closed set of data-bearing REDCap field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Single-choice field rendered as radio buttons.
    Radio,
    /// Single-choice field rendered as a dropdown.
    Dropdown,
    /// Multi-choice field exploded into one `field___code` column per option.
    Checkbox,
    /// Fixed yes/no field coded `1`/`0`.
    YesNo,
    /// Free-text field, optionally constrained by a validation kind.
    Text,
    /// Server-side calculated numeric field.
    Calc,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::Dropdown => "dropdown",
            Self::Checkbox => "checkbox",
            Self::YesNo => "yesno",
            Self::Text => "text",
            Self::Calc => "calc",
        }
    }

    /// Whether this type requires a parsable choices string.
    pub fn requires_choices(self) -> bool {
        matches!(self, Self::Radio | Self::Dropdown | Self::Checkbox)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "radio" => Ok(Self::Radio),
            "dropdown" => Ok(Self::Dropdown),
            "checkbox" => Ok(Self::Checkbox),
            "yesno" => Ok(Self::YesNo),
            "text" => Ok(Self::Text),
            "calc" => Ok(Self::Calc),
            other => Err(other.to_string()),
        }
    }
}

/// Component order of a formatted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateOrder {
    YearMonthDay,
    MonthDayYear,
    DayMonthYear,
}

/// Secondary discriminator for `text`/`calc` fields.
///
/// An absent or blank kind is represented as `Option::None` on the field
/// descriptor, not as an enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationKind {
    Time,
    AlphaOnly,
    DateYmd,
    DateMdy,
    DateDmy,
    Integer,
    Number,
    Number1dp,
    Number4dp,
}

impl ValidationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::AlphaOnly => "alpha_only",
            Self::DateYmd => "date_ymd",
            Self::DateMdy => "date_mdy",
            Self::DateDmy => "date_dmy",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Number1dp => "number_1dp",
            Self::Number4dp => "number_4dp",
        }
    }

    /// Date component order for the `date_*` kinds.
    pub fn date_order(self) -> Option<DateOrder> {
        match self {
            Self::DateYmd => Some(DateOrder::YearMonthDay),
            Self::DateMdy => Some(DateOrder::MonthDayYear),
            Self::DateDmy => Some(DateOrder::DayMonthYear),
            _ => None,
        }
    }

    /// Parse a dictionary cell, treating blank as "no validation kind".
    pub fn parse_opt(field: &str, raw: &str) -> Result<Option<Self>, SchemaError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse()
            .map(Some)
            .map_err(|value| SchemaError::UnknownValidationKind {
                field: field.to_string(),
                value,
            })
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "time" => Ok(Self::Time),
            "alpha_only" => Ok(Self::AlphaOnly),
            "date_ymd" => Ok(Self::DateYmd),
            "date_mdy" => Ok(Self::DateMdy),
            "date_dmy" => Ok(Self::DateDmy),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "number_1dp" => Ok(Self::Number1dp),
            "number_4dp" => Ok(Self::Number4dp),
            other => Err(other.to_string()),
        }
    }
}
