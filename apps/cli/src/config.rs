//! Runtime configuration.
//!
//! Read from environment variables (an optional `.env` file is loaded first):
//!
//! | Variable | Default |
//! |---|---|
//! | `QUIZBOT_DATA_DIR` | `<local data dir>/quizbot`, or `.` |
//! | `QUIZBOT_IMPORT_FILE` | `<data dir>/questions.txt` |
//! | `QUIZBOT_MAX_QUESTIONS` | `10` |
//! | `RUST_LOG` | `warn` |

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const USERS_FILE: &str = "users.dat";
pub const QUESTIONS_FILE: &str = "questions.dat";
pub const HISTORY_FILE: &str = "history.dat";
pub const IMPORT_FILE: &str = "questions.txt";

pub const DEFAULT_MAX_QUESTIONS: usize = 10;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    NotPositive { key: &'static str, value: String },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Where the record stores and the import file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub users_file: PathBuf,
    pub questions_file: PathBuf,
    pub history_file: PathBuf,
    pub import_file: PathBuf,
}

impl StorageConfig {
    /// Every file under `data_dir`, with the default names.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            users_file: data_dir.join(USERS_FILE),
            questions_file: data_dir.join(QUESTIONS_FILE),
            history_file: data_dir.join(HISTORY_FILE),
            import_file: data_dir.join(IMPORT_FILE),
            data_dir,
        }
    }

    pub fn with_import_file(mut self, path: impl AsRef<Path>) -> Self {
        self.import_file = path.as_ref().to_path_buf();
        self
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub max_questions_per_game: usize,
    pub log_filter: String,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup("QUIZBOT_DATA_DIR") {
            Some(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    key: "QUIZBOT_DATA_DIR",
                })
            }
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir(),
        };

        let mut storage = StorageConfig::in_dir(data_dir);
        if let Some(import_file) = lookup("QUIZBOT_IMPORT_FILE") {
            if import_file.trim().is_empty() {
                return Err(ConfigError::Empty {
                    key: "QUIZBOT_IMPORT_FILE",
                });
            }
            storage = storage.with_import_file(import_file);
        }

        let max_questions_per_game = match lookup("QUIZBOT_MAX_QUESTIONS") {
            Some(value) => parse_positive("QUIZBOT_MAX_QUESTIONS", &value)?,
            None => DEFAULT_MAX_QUESTIONS,
        };

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            storage,
            max_questions_per_game,
            log_filter,
        })
    }
}

fn default_data_dir() -> PathBuf {
    // Use the local data directory when there is one, fallback to current dir
    dirs::data_local_dir()
        .map(|dir| dir.join("quizbot"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_positive(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::NotPositive {
            key,
            value: value.to_string(),
        }),
    }
}
