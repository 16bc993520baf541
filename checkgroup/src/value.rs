//! Scalar option values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar value carried by an option and stored in a selection.
///
/// Numbers compare by exact numeric value, so `Int(1)` equals `Float(1.0)`
/// but `Int(2^53 + 1)` does not equal `Float(2^53)`.
/// `NaN` equals itself, keeping selections duplicate-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl OptionValue {
    /// Convert a JSON scalar. Returns `None` for null, arrays and objects.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float)),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => int_equals_float(*i, *f),
            _ => false,
        }
    }
}

/// Exact numeric equality: the float must be integral and convert to `i`
/// in both directions without rounding.
fn int_equals_float(i: i64, f: f64) -> bool {
    // 2^63; `as` saturates at the i64 bounds.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (-LIMIT..LIMIT).contains(&f) && f.fract() == 0.0 && f as i64 == i && i as f64 == f
}

impl Eq for OptionValue {}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        Self::Int(i.into())
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<OptionValue> for serde_json::Value {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Bool(b) => b.into(),
            OptionValue::Int(i) => i.into(),
            OptionValue::Float(x) => x.into(),
            OptionValue::Text(s) => s.into(),
        }
    }
}
