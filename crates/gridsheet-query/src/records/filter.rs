use super::{Record, field_scalar};
use crate::error::{QueryError, Result};
use gridsheet_core::Scalar;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Comparison operator of a [`Filter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl CompareOp {
    /// Apply the operator to an ordering; `None` (NaN involved) only satisfies `!=`.
    fn holds(self, ord: Option<Ordering>) -> bool {
        match self {
            CompareOp::Eq => ord == Some(Ordering::Equal),
            CompareOp::Ne => ord != Some(Ordering::Equal),
            CompareOp::Gt => ord == Some(Ordering::Greater),
            CompareOp::Lt => ord == Some(Ordering::Less),
            CompareOp::Ge => matches!(ord, Some(Ordering::Greater | Ordering::Equal)),
            CompareOp::Le => matches!(ord, Some(Ordering::Less | Ordering::Equal)),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
        }
    }
}

impl FromStr for CompareOp {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "=" | "==" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::Ne),
            ">" => Ok(CompareOp::Gt),
            "<" => Ok(CompareOp::Lt),
            ">=" => Ok(CompareOp::Ge),
            "<=" => Ok(CompareOp::Le),
            other => Err(QueryError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Textual form used when a side is not numeric.
pub(super) fn text_key(value: &Scalar) -> Cow<'_, str> {
    match value {
        Scalar::Null => Cow::Borrowed("None"),
        Scalar::Text(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Compare two values: numerically when both coerce to numbers, otherwise by text.
pub fn compare(left: &Scalar, op: CompareOp, right: &Scalar) -> bool {
    let ord = match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => a.partial_cmp(&b),
        _ => Some(text_key(left).cmp(&text_key(right))),
    };
    op.holds(ord)
}

/// A `field op value` condition on a record.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub field: String,
    pub op: CompareOp,
    pub value: Scalar,
}

impl Filter {
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<Scalar>) -> Filter {
        Filter {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Build a filter from user-supplied text (`weight`, `>=`, `3`).
    pub fn parse(field: &str, op: &str, value: &str) -> Result<Filter> {
        let field = field.trim();
        if field.is_empty() {
            return Err(QueryError::InvalidFilter("field name is empty".to_string()));
        }
        Ok(Filter::new(field, op.parse()?, Scalar::from_input(value)))
    }

    /// A missing field compares as null.
    pub fn matches(&self, record: &Record) -> bool {
        compare(&field_scalar(record, &self.field), self.op, &self.value)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, text_key(&self.value))
    }
}
