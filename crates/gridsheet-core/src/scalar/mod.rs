//! Cell values.
//!
//! A cell holds a [`Scalar`]: nothing (`Null`), a boolean, an integer, a
//! float or a piece of text. Whether a cell counts as "present" depends only
//! on that value, see [`Scalar::is_absent`].

mod format;
mod parse;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use format::format_float;
pub use parse::try_parse_number;

/// The value stored in a grid cell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Never written.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// True when `text` consists only of spaces and tabs (the empty string included).
///
/// Newlines and other Unicode whitespace do not count as blank.
pub fn is_blank_text(text: &str) -> bool {
    text.chars().all(|ch| ch == ' ' || ch == '\t')
}

impl Scalar {
    /// A cell is absent when it holds `Null` or blank text.
    pub fn is_absent(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Text(s) => is_blank_text(s),
            _ => false,
        }
    }

    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Numeric view of the value, see [`try_parse_number`].
    pub fn as_number(&self) -> Option<f64> {
        try_parse_number(self)
    }

    /// Interpret typed user input.
    /// - Blank (spaces/tabs only) -> Null
    /// - Integer literal -> Int
    /// - Float literal -> Float
    /// - Otherwise -> Text (trimmed)
    pub fn from_input(input: &str) -> Scalar {
        if is_blank_text(input) {
            return Scalar::Null;
        }
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Scalar::Int(n);
        }
        if parse::looks_numeric(trimmed) {
            if let Some(n) = parse::parse_number_text(trimmed) {
                return Scalar::Float(n);
            }
        }
        Scalar::Text(trimmed.to_string())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => f.write_str(&format_float(*n)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Scalar::Text(s) if s == other)
    }
}
