//! Error types for the query utilities.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unknown comparison operator: {0}")]
    UnknownOperator(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QueryError>;
