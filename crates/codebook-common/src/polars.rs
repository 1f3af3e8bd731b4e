//! Polars AnyValue utility functions.
//!
//! This module bridges Polars `AnyValue` cells into [`Value`] and provides the
//! numeric parsing shared by every statistic.

use polars::prelude::{AnyValue, Column};

use crate::value::Value;

/// Converts a Polars `AnyValue` into a [`Value`].
///
/// Nulls, NaN and blank strings are missing. Integers keep their integer
/// reading; every other type is read through its display text.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use codebook_common::{Value, any_to_value};
///
/// assert_eq!(any_to_value(AnyValue::Null), Value::Missing);
/// assert_eq!(any_to_value(AnyValue::Int32(42)), Value::Int(42));
/// assert_eq!(any_to_value(AnyValue::String("  ")), Value::Missing);
/// ```
pub fn any_to_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Missing,
        AnyValue::Int8(v) => Value::Int(i64::from(v)),
        AnyValue::Int16(v) => Value::Int(i64::from(v)),
        AnyValue::Int32(v) => Value::Int(i64::from(v)),
        AnyValue::Int64(v) => Value::Int(v),
        AnyValue::UInt8(v) => Value::Int(i64::from(v)),
        AnyValue::UInt16(v) => Value::Int(i64::from(v)),
        AnyValue::UInt32(v) => Value::Int(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => Value::Int(v),
            Err(_) => Value::from(v as f64),
        },
        AnyValue::Float32(v) => Value::from(f64::from(v)),
        AnyValue::Float64(v) => Value::from(v),
        AnyValue::String(s) => text_value(s),
        AnyValue::StringOwned(s) => text_value(s.as_str()),
        AnyValue::Boolean(b) => Value::Text(b.to_string()),
        other => text_value(&other.to_string()),
    }
}

fn text_value(text: &str) -> Value {
    if text.trim().is_empty() {
        Value::Missing
    } else {
        Value::Text(text.to_string())
    }
}

/// Reads every cell of a column, in row order.
pub fn column_values(column: &Column) -> Vec<Value> {
    (0..column.len())
        .map(|idx| any_to_value(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use codebook_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    any_to_value(value).as_f64()
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
