//! Core quiz library used by the terminal game.
//!
//! Provides:
//! - Answer matching for free-text questions (normalization, Levenshtein distance)
//! - Parser for `;`-separated question import files
//! - Shared types (Question, Player, HistoryEntry, Difficulty)

pub mod error;
pub mod matching;
pub mod parser;
pub mod types;

pub use error::{MatchError, ParseError, Result, ValidationError};
pub use matching::{
    is_accepted, levenshtein_distance, match_answer, normalize, tolerance_for, MatchResult,
    MatchRule,
};
pub use parser::{parse, Import};
pub use types::{Difficulty, DifficultyChoice, HistoryEntry, Player, Question};
