//! Conversion of raw dictionary/data text to typed values.
//!
//! Each `as_*` function attempts one specific conversion and fails with a
//! [`CastError`] on malformed input. [`cast_bound`] adds the documented
//! recovery policy for dictionary-declared min/max bounds: on failure the
//! raw text is kept verbatim and a warning names the failed cast. That
//! policy is never applied to captured data.

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

use crate::enums::{DateOrder, ValidationKind};
use crate::error::CastError;
use crate::value::{CellValue, is_null_like};

/// Parse a date in the given component order. Accepts `-` and `/`
/// separators.
pub fn as_date(raw: &str, order: DateOrder) -> Result<NaiveDate, CastError> {
    let trimmed = raw.trim();
    let formats: &[&str] = match order {
        DateOrder::YearMonthDay => &["%Y-%m-%d", "%Y/%m/%d"],
        DateOrder::MonthDayYear => &["%m-%d-%Y", "%m/%d/%Y"],
        DateOrder::DayMonthYear => &["%d-%m-%Y", "%d/%m/%Y"],
    };
    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(CastError::new(trimmed, date_target(order)))
}

fn date_target(order: DateOrder) -> &'static str {
    match order {
        DateOrder::YearMonthDay => "date (ymd)",
        DateOrder::MonthDayYear => "date (mdy)",
        DateOrder::DayMonthYear => "date (dmy)",
    }
}

/// Parse a clock time. Accepts `HH:MM` and `HH:MM:SS`.
pub fn as_time(raw: &str) -> Result<NaiveTime, CastError> {
    let trimmed = raw.trim();
    for format in ["%H:%M", "%H:%M:%S"] {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return Ok(time);
        }
    }
    Err(CastError::new(trimmed, "time"))
}

pub fn as_integer(raw: &str) -> Result<i64, CastError> {
    raw.trim()
        .parse()
        .map_err(|_| CastError::new(raw.trim(), "integer"))
}

pub fn as_float(raw: &str) -> Result<f64, CastError> {
    raw.trim()
        .parse()
        .map_err(|_| CastError::new(raw.trim(), "number"))
}

/// Identity conversion. Infallible; exists so every validation kind has a
/// caster.
pub fn as_string(raw: &str) -> String {
    raw.trim().to_string()
}

/// Cast raw text with the caster a validation kind implies. An absent kind
/// casts to string, matching the dictionary's untyped default.
pub fn cast_for_kind(raw: &str, kind: Option<ValidationKind>) -> Result<CellValue, CastError> {
    let Some(kind) = kind else {
        return Ok(CellValue::Text(as_string(raw)));
    };
    match kind {
        ValidationKind::Time => as_time(raw).map(CellValue::Time),
        ValidationKind::AlphaOnly => Ok(CellValue::Text(as_string(raw))),
        ValidationKind::DateYmd | ValidationKind::DateMdy | ValidationKind::DateDmy => {
            let order = kind.date_order().unwrap_or(DateOrder::YearMonthDay);
            as_date(raw, order).map(CellValue::Date)
        }
        ValidationKind::Integer => as_integer(raw).map(CellValue::Integer),
        ValidationKind::Number | ValidationKind::Number1dp | ValidationKind::Number4dp => {
            as_float(raw).map(CellValue::Float)
        }
    }
}

/// Recovery policy applied when a dictionary bound fails to cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastFallback {
    /// Keep the raw text verbatim and warn.
    StringVerbatim,
}

/// Recast a dictionary-declared bound into the type its validation kind
/// implies.
///
/// A bound that cannot be parsed must not block compilation, only be
/// recorded verbatim, so cast failures degrade per `fallback` instead of
/// erroring. Null-like raw text is simply an absent bound.
pub fn cast_bound(raw: &str, kind: Option<ValidationKind>, fallback: CastFallback) -> CellValue {
    if is_null_like(raw) {
        return CellValue::Missing;
    }
    match cast_for_kind(raw, kind) {
        Ok(value) => value,
        Err(error) => match fallback {
            CastFallback::StringVerbatim => {
                warn!(
                    value = %error.value,
                    target = %error.target,
                    "validation bound failed to cast, falling back to the raw string"
                );
                CellValue::Text(raw.trim().to_string())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_orders() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
        assert_eq!(as_date("2021-03-14", DateOrder::YearMonthDay).unwrap(), expected);
        assert_eq!(as_date("03/14/2021", DateOrder::MonthDayYear).unwrap(), expected);
        assert_eq!(as_date("14-03-2021", DateOrder::DayMonthYear).unwrap(), expected);
        assert!(as_date("14-03-2021", DateOrder::YearMonthDay).is_err());
    }

    #[test]
    fn time_accepts_seconds() {
        let expected = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(as_time("09:30").unwrap(), expected);
        assert_eq!(as_time("09:30:00").unwrap(), expected);
        assert!(as_time("9h30").is_err());
    }

    #[test]
    fn numeric_casts() {
        assert_eq!(as_integer(" 42 ").unwrap(), 42);
        assert!(as_integer("4.2").is_err());
        assert_eq!(as_float("4.2").unwrap(), 4.2);
        assert!(as_float("four").is_err());
    }

    #[test]
    fn bound_casts_to_kind_type() {
        assert_eq!(
            cast_bound("10", Some(ValidationKind::Integer), CastFallback::StringVerbatim),
            CellValue::Integer(10)
        );
        assert_eq!(
            cast_bound("1.5", Some(ValidationKind::Number), CastFallback::StringVerbatim),
            CellValue::Float(1.5)
        );
    }

    #[test]
    fn bound_fallback_keeps_raw_string() {
        assert_eq!(
            cast_bound("N/A", Some(ValidationKind::Number), CastFallback::StringVerbatim),
            CellValue::Text("N/A".into())
        );
    }

    #[test]
    fn bound_blank_is_absent() {
        assert_eq!(
            cast_bound("", Some(ValidationKind::Number), CastFallback::StringVerbatim),
            CellValue::Missing
        );
        assert_eq!(
            cast_bound("  ", None, CastFallback::StringVerbatim),
            CellValue::Missing
        );
    }
}
