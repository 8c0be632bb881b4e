use std::fmt;

use async_trait::async_trait;

use crate::core::table::{ConjugationTable, ShapeError};

/// Errors that can occur while fetching a verb's conjugations.
/// None of them are retried; each one aborts the fetch for that verb.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The page has no `<table>` element.
    NoTable,
    /// The first table did not yield the expected number of tokens.
    Shape(ShapeError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::NoTable => write!(f, "no conjugation table found on page"),
            FetchError::Shape(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<ShapeError> for FetchError {
    fn from(e: ShapeError) -> Self {
        FetchError::Shape(e)
    }
}

/// Anything that can produce a verb's conjugation table.
#[async_trait]
pub trait ConjugationSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Fetch and reshape the full conjugation table for `verb`.
    async fn fetch(&self, verb: &str) -> Result<ConjugationTable, FetchError>;
}
