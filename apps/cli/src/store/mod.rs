//! Flat-file record store for players, questions and game history.

pub mod error;
pub mod record;
pub mod repository;

pub use error::{RecordError, StoreError};
pub use record::Record;
pub use repository::{
    Bootstrap, FileStore, HistoryRepository, PlayerRepository, QuestionDraft, QuestionRepository,
};
