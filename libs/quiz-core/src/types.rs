//! Core types for the quiz.

use crate::error::ValidationError;
use crate::matching::{normalize, variants};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Longest nickname, in bytes.
pub const NICKNAME_MAX_LEN: usize = 63;
/// Longest theme, in bytes.
pub const THEME_MAX_LEN: usize = 63;
/// Longest question prompt, in bytes.
pub const PROMPT_MAX_LEN: usize = 255;
/// Longest expected answer (all variants included), in bytes.
pub const ANSWER_MAX_LEN: usize = 255;

/// Nickname given to players who do not type one.
pub const GUEST_NICKNAME: &str = "Invité";

/// Question difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Convert to numeric value (1-3).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Create from numeric value.
    pub fn from_value(value: i64) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(ValidationError::DifficultyOutOfRange(other)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Facile",
            Self::Medium => "Moyen",
            Self::Hard => "Difficile",
        }
    }
}

/// Difficulty picked for a game: one level, or every question mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyChoice {
    Only(Difficulty),
    Mixed,
}

impl DifficultyChoice {
    /// Convert to numeric value (1-3 for a level, 4 for mixed).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Only(difficulty) => difficulty.to_value(),
            Self::Mixed => 4,
        }
    }

    /// Create from numeric value.
    pub fn from_value(value: i64) -> Result<Self, ValidationError> {
        match value {
            4 => Ok(Self::Mixed),
            1..=3 => Difficulty::from_value(value).map(Self::Only),
            other => Err(ValidationError::ChoiceOutOfRange(other)),
        }
    }

    /// Whether a question of `difficulty` belongs to this choice.
    pub fn includes(self, difficulty: Difficulty) -> bool {
        match self {
            Self::Only(only) => only == difficulty,
            Self::Mixed => true,
        }
    }
}

impl fmt::Display for DifficultyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Only(difficulty) => f.write_str(difficulty.label()),
            Self::Mixed => f.write_str("Mixte"),
        }
    }
}

/// Question from the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: u32,
    theme: String,
    difficulty: Difficulty,
    prompt: String,
    answer: String,
}

impl Question {
    /// Build a question, checking field sizes and answer variants.
    pub fn new(
        id: u32,
        theme: impl Into<String>,
        difficulty: Difficulty,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let theme = theme.into();
        let prompt = prompt.into();
        let answer = answer.into();

        check_len("theme", &theme, THEME_MAX_LEN)?;
        check_not_empty("prompt", &prompt)?;
        check_len("prompt", &prompt, PROMPT_MAX_LEN)?;
        check_not_empty("answer", &answer)?;
        check_len("answer", &answer, ANSWER_MAX_LEN)?;

        for (index, variant) in variants(&answer).enumerate() {
            if normalize(variant).is_empty() {
                return Err(ValidationError::EmptyVariant { index: index + 1 });
            }
        }

        Ok(Self {
            id,
            theme,
            difficulty,
            prompt,
            answer,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Expected answer, variants joined by `|`.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// First variant, shown to the player after a wrong answer.
    pub fn primary_answer(&self) -> &str {
        variants(&self.answer).next().unwrap_or(&self.answer)
    }
}

/// Registered player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    nickname: String,
    is_admin: bool,
    best_score: u32,
}

impl Player {
    /// Fresh player with no score yet.
    pub fn new(nickname: impl Into<String>, is_admin: bool) -> Result<Self, ValidationError> {
        Self::with_best_score(nickname, is_admin, 0)
    }

    /// Player as stored, with a previous best score.
    pub fn with_best_score(
        nickname: impl Into<String>,
        is_admin: bool,
        best_score: u32,
    ) -> Result<Self, ValidationError> {
        let nickname = nickname.into();
        check_nickname(&nickname)?;
        Ok(Self {
            nickname,
            is_admin,
            best_score,
        })
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Keep `score` if it beats the best so far. Returns whether it did.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.best_score {
            self.best_score = score;
            true
        } else {
            false
        }
    }
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    played_at: DateTime<Utc>,
    nickname: String,
    score: u32,
    difficulty: DifficultyChoice,
}

impl HistoryEntry {
    pub fn new(
        played_at: DateTime<Utc>,
        nickname: impl Into<String>,
        score: u32,
        difficulty: DifficultyChoice,
    ) -> Result<Self, ValidationError> {
        let nickname = nickname.into();
        check_nickname(&nickname)?;
        Ok(Self {
            played_at,
            nickname,
            score,
            difficulty,
        })
    }

    pub fn played_at(&self) -> DateTime<Utc> {
        self.played_at
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn difficulty(&self) -> DifficultyChoice {
        self.difficulty
    }
}

/// Check a nickname typed at login or read from a record.
pub fn check_nickname(nickname: &str) -> Result<(), ValidationError> {
    check_not_empty("nickname", nickname)?;
    check_len("nickname", nickname, NICKNAME_MAX_LEN)
}

fn check_not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.len() > max {
        return Err(ValidationError::TooLong {
            field,
            len: value.len(),
            max,
        });
    }
    Ok(())
}
