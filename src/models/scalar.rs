//! Loosely-typed scalar values from the source document
//!
//! Numeric fields in the source arrive as JSON numbers, numeric strings, or
//! occasionally booleans. `Scalar` keeps the original shape so each consumer
//! can apply its own coercion rule.

use serde_json::Value;
use std::fmt;

/// A JSON scalar as found in an input record
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Scalar {
    /// Convert a JSON value, treating null, arrays and objects as absent
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Numeric coercion used for ratios
    ///
    /// Text is parsed with [`parse_float`]; booleans count as 1 and 0.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_float(s),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// Strict textual float parse used for amounts
    ///
    /// Unlike [`Scalar::to_number`], booleans are not numbers here.
    pub fn parse_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_float(s),
            Self::Bool(_) => None,
        }
    }

    /// Render the scalar as display text
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Parse the longest leading decimal literal of a string
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"12.5kg"` parses as `12.5`. Accepts an optional sign, `Infinity`,
/// fractional forms like `"5."` and `".5"`, and an exponent. Returns `None`
/// when no digits can be read.
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits + (j - frac_start) > 0 {
            digits += j - frac_start;
            end = j;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok()
}
