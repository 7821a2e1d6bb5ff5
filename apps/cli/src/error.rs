//! Errors surfaced by the game commands.

use crate::store::StoreError;
use quiz_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, CommandError>;
