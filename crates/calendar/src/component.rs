//! Untyped date components as they arrive from configuration or the command line.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A single day, month or year value before type checking.
///
/// [`Date::from_components`](crate::Date::from_components) accepts only
/// [`Component::Integer`]; the other variants exist so that callers holding
/// loosely typed input can hand it over unchanged and get a
/// [`DateError::NotInteger`](crate::DateError::NotInteger) back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Component {
    /// A whole number.
    Integer(i64),
    /// A floating point number. Never accepted, even with no fractional part.
    Float(f64),
    /// Text, including text that looks numeric.
    Text(String),
}

impl Component {
    /// Returns the value if this component is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(_) | Self::Text(_) => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Classifies command-line text: integers first, then floats, else text.
impl FromStr for Component {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self::Integer(value));
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return Ok(Self::Float(value));
        }
        Ok(Self::Text(s.to_string()))
    }
}

impl From<i64> for Component {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Component {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u8> for Component {
    fn from(value: u8) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Component {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
