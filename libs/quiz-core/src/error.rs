//! Error types for quiz-core.

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading a question import file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing {field} at line {line}")]
    MissingField { line: usize, field: &'static str },

    #[error("invalid difficulty at line {line}: {value}")]
    InvalidDifficulty { line: usize, value: String },

    #[error("invalid question at line {line}: {source}")]
    InvalidQuestion {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

impl ParseError {
    /// Line of the import file the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingField { line, .. }
            | Self::InvalidDifficulty { line, .. }
            | Self::InvalidQuestion { line, .. } => *line,
        }
    }
}

/// Errors raised when building a record from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is {len} bytes long, at most {max} allowed")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("answer variant {index} has no letters or digits")]
    EmptyVariant { index: usize },

    #[error("difficulty must be 1, 2 or 3, got {0}")]
    DifficultyOutOfRange(i64),

    #[error("difficulty choice must be between 1 and 4, got {0}")]
    ChoiceOutOfRange(i64),
}

/// Errors that keep the matcher from reaching a verdict.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("not enough memory to score the answer: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
