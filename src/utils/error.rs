//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing a measurement line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("line {line}: missing ';' delimiter in {content:?}")]
    MissingDelimiter { line: u64, content: String },

    #[error("line {line}: empty key in {content:?}")]
    EmptyKey { line: u64, content: String },

    #[error("line {line}: invalid value {value:?}")]
    InvalidValue { line: u64, value: String },
}

impl ParseError {
    /// Line number (1-based) the error was found on, 0 if parsed outside a stream
    pub fn line(&self) -> u64 {
        match self {
            ParseError::MissingDelimiter { line, .. }
            | ParseError::EmptyKey { line, .. }
            | ParseError::InvalidValue { line, .. } => *line,
        }
    }

    /// Attach the stream line number
    pub(crate) fn at_line(self, n: u64) -> Self {
        match self {
            ParseError::MissingDelimiter { content, .. } => {
                ParseError::MissingDelimiter { line: n, content }
            }
            ParseError::EmptyKey { content, .. } => ParseError::EmptyKey { line: n, content },
            ParseError::InvalidValue { value, .. } => ParseError::InvalidValue { line: n, value },
        }
    }
}

/// Errors that can occur during streaming aggregation
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    Parse(#[from] ParseError),
}

/// Errors that can occur while loading the relational store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    Parse(#[from] ParseError),

    #[error("Batch size must be greater than 0")]
    InvalidBatchSize,
}

/// Errors that can occur while writing the report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),
}

/// Errors that can occur while generating a measurements file
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid distribution for station {station}: {reason}")]
    InvalidStation { station: String, reason: String },
}
