//! Dataset cell values.

use serde::Serialize;

use crate::polars::{format_numeric, parse_f64};

/// One cell of a dataset column.
///
/// Floating-point NaN never appears here; it is read as [`Value::Missing`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric reading of the cell. Text is parsed; missing cells and
    /// unparseable text yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Missing => None,
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(s) => parse_f64(s),
        }
    }

    /// Text reading of the cell. Missing cells become an empty string and
    /// integral floats drop their trailing zeros.
    pub fn to_text(&self) -> String {
        match self {
            Value::Missing => String::new(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => format_numeric(*v),
            Value::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Value::Missing
        } else {
            Value::Float(value)
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_reads_as_missing() {
        assert_eq!(Value::from(f64::NAN), Value::Missing);
        assert_eq!(Value::from(None::<i64>), Value::Missing);
    }

    #[test]
    fn numeric_reading() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::from(" 2.5 ").as_f64(), Some(2.5));
        assert_eq!(Value::from("abc").as_f64(), None);
        assert_eq!(Value::Missing.as_f64(), None);
    }

    #[test]
    fn text_reading() {
        assert_eq!(Value::Float(2.0).to_text(), "2");
        assert_eq!(Value::Float(2.5).to_text(), "2.5");
        assert_eq!(Value::Int(-7).to_text(), "-7");
        assert_eq!(Value::Missing.to_text(), "");
    }
}
