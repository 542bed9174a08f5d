//! Error types for the gridsheet command line

use gridsheet_core::GridError;
use gridsheet_query::QueryError;
use thiserror::Error;

/// Errors that can occur in the gridsheet binary
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

pub type Result<T> = std::result::Result<T, CliError>;
