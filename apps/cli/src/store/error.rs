//! Record store error types.

use quiz_core::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt store {path}: {len} bytes is not a whole number of {record_size}-byte records")]
    Corrupt {
        path: PathBuf,
        len: usize,
        record_size: usize,
    },

    #[error("invalid record {index} in {path}: {reason}")]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        reason: RecordError,
    },

    #[error("player already exists: {0}")]
    DuplicatePlayer(String),

    #[error("player not found: {0}")]
    PlayerNotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(#[from] ValidationError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a single fixed-size record could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{0}")]
    Field(#[from] ValidationError),

    #[error("negative {field}: {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("timestamp out of range: {0}")]
    Timestamp(i64),
}
