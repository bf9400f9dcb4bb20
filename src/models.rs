use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::CANONICAL_NAME;

/// A raw value handed to the standardizer.
///
/// Callers holding loosely typed data (JSON rows, optional columns) convert
/// into this type instead of checking the shape themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Text(String),
    Absent,
    /// Any non-text value; the label names its kind for diagnostics.
    Other(&'static str),
}

impl From<&str> for RawInput {
    fn from(raw: &str) -> Self {
        RawInput::Text(raw.to_string())
    }
}

impl From<String> for RawInput {
    fn from(raw: String) -> Self {
        RawInput::Text(raw)
    }
}

impl From<Option<&str>> for RawInput {
    fn from(raw: Option<&str>) -> Self {
        raw.map_or(RawInput::Absent, RawInput::from)
    }
}

impl From<Option<String>> for RawInput {
    fn from(raw: Option<String>) -> Self {
        raw.map_or(RawInput::Absent, RawInput::Text)
    }
}

impl From<i64> for RawInput {
    fn from(_: i64) -> Self {
        RawInput::Other("number")
    }
}

impl From<f64> for RawInput {
    fn from(_: f64) -> Self {
        RawInput::Other("number")
    }
}

impl From<bool> for RawInput {
    fn from(_: bool) -> Self {
        RawInput::Other("bool")
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawInput::Absent,
            Value::String(s) => RawInput::Text(s),
            Value::Bool(_) => RawInput::Other("bool"),
            Value::Number(_) => RawInput::Other("number"),
            Value::Array(_) => RawInput::Other("array"),
            Value::Object(_) => RawInput::Other("object"),
        }
    }
}

/// Deserializes from any JSON value; the shape is classified, never rejected.
impl<'de> Deserialize<'de> for RawInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(RawInput::from)
    }
}

/// Result of the two token tests over a non-blank input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognition {
    /// Some token equals `caf` exactly (case-insensitive).
    pub has_caf: bool,
    /// Some token is a SoftSol / Solution variant.
    pub has_softsol: bool,
}

/// Why an input did not map to [`CANONICAL_NAME`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Absent,
    NotText(&'static str),
    Blank,
    MissingCafToken,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Absent => write!(f, "absent input"),
            Rejection::NotText(kind) => write!(f, "non-text input ({})", kind),
            Rejection::Blank => write!(f, "blank input"),
            Rejection::MissingCafToken => write!(f, "no \"caf\" token"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Recognized(Recognition),
    Rejected(Rejection),
}

impl Outcome {
    /// The string `standardize` returns for this outcome: the canonical
    /// name, or `""` as the not-recognized sentinel.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Recognized(_) => CANONICAL_NAME,
            Outcome::Rejected(_) => "",
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Outcome::Recognized(_))
    }
}
