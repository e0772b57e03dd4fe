use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw value as supplied by a caller, before normalization.
///
/// Form fields arrive as text while programmatic callers pass numbers; both
/// are accepted and reduced to an `f64` inside the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawInput {
    /// Whole number
    Integer(i64),
    /// Floating-point number
    Float(f64),
    /// Text, typically straight from an input field
    String(String),
    /// No value supplied
    Null,
}

impl RawInput {
    /// Returns `true` when the value counts as not entered: `Null`, or a
    /// string that is empty after trimming.
    pub fn is_missing(&self) -> bool {
        match self {
            RawInput::Null => true,
            RawInput::String(s) => s.trim().is_empty(),
            RawInput::Integer(_) | RawInput::Float(_) => false,
        }
    }

    /// Convert to a number if possible.
    ///
    /// Strings are trimmed and parsed; missing or unparseable values yield
    /// `None`. Non-finite floats are returned as-is so callers can reject them.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawInput::Integer(i) => Some(*i as f64),
            RawInput::Float(f) => Some(*f),
            RawInput::String(s) => s.trim().parse::<f64>().ok(),
            RawInput::Null => None,
        }
    }
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInput::Integer(i) => write!(f, "{i}"),
            RawInput::Float(fl) => write!(f, "{fl}"),
            RawInput::String(s) => write!(f, "\"{s}\""),
            RawInput::Null => write!(f, "null"),
        }
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::String(value)
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::String(value.to_string())
    }
}

impl From<&String> for RawInput {
    fn from(value: &String) -> Self {
        RawInput::String(value.clone())
    }
}

impl From<i64> for RawInput {
    fn from(value: i64) -> Self {
        RawInput::Integer(value)
    }
}

impl From<i32> for RawInput {
    fn from(value: i32) -> Self {
        RawInput::Integer(i64::from(value))
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Float(value)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Null, Into::into)
    }
}

/// A height/weight pair in centimeters and kilograms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

impl Measurement {
    /// Creates a new `Measurement`. No validation is performed here.
    pub const fn new(height_cm: f64, weight_kg: f64) -> Self {
        Self { height_cm, weight_kg }
    }

    /// Height converted to meters.
    pub fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }
}
