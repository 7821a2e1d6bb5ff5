//! Repository pattern over the flat record files.

use super::error::StoreError;
use super::record::{encode_all, Record};
use crate::config::StorageConfig;
use quiz_core::{parser, Difficulty, HistoryEntry, Player, Question};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info, warn};

type Result<T> = std::result::Result<T, StoreError>;

/// Repository for player operations.
pub trait PlayerRepository {
    fn load_players(&self) -> Result<Vec<Player>>;
    fn find_player(&self, nickname: &str) -> Result<Option<Player>>;
    fn register_player(&self, nickname: &str) -> Result<Player>;
    fn save_best_score(&self, nickname: &str, score: u32) -> Result<bool>;
}

/// Repository for the question bank.
pub trait QuestionRepository {
    fn load_questions(&self) -> Result<Vec<Question>>;
    fn add_question(&self, draft: QuestionDraft) -> Result<Question>;
    fn replace_questions(&self, questions: &[Question]) -> Result<()>;
}

/// Repository for played games.
pub trait HistoryRepository {
    fn load_history(&self) -> Result<Vec<HistoryEntry>>;
    fn append_history(&self, entry: &HistoryEntry) -> Result<()>;
}

/// Question typed by an administrator, before it gets an id.
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub theme: String,
    pub difficulty: Difficulty,
    pub prompt: String,
    pub answer: String,
}

/// Outcome of filling an empty question bank from the import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrap {
    /// The bank already had questions.
    AlreadyFilled(usize),
    /// Questions were imported; `skipped` lines were unusable.
    Imported { imported: usize, skipped: usize },
    /// The bank is empty and there is no import file.
    NoImportFile,
}

/// Record store backed by three fixed-record files.
pub struct FileStore {
    config: StorageConfig,
}

impl FileStore {
    /// Open the store, creating the data directory and empty files if necessary.
    pub fn open(config: StorageConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .map_err(|e| StoreError::io(&config.data_dir, e))?;

        for path in [
            &config.users_file,
            &config.questions_file,
            &config.history_file,
        ] {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| StoreError::io(path, e))?;
        }

        Ok(Self { config })
    }

    /// Fill the question bank from the import file when it is empty.
    pub fn bootstrap_questions(&self) -> Result<Bootstrap> {
        let existing = self.load_questions()?;
        if !existing.is_empty() {
            return Ok(Bootstrap::AlreadyFilled(existing.len()));
        }

        let path = &self.config.import_file;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "question bank is empty and there is no import file");
                return Ok(Bootstrap::NoImportFile);
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let import = parser::parse(&content);
        for skipped in &import.skipped {
            warn!(path = %path.display(), line = skipped.line(), "skipped import line: {skipped}");
        }

        self.replace_questions(&import.questions)?;
        info!(
            imported = import.questions.len(),
            skipped = import.skipped.len(),
            "question bank imported"
        );

        Ok(Bootstrap::Imported {
            imported: import.questions.len(),
            skipped: import.skipped.len(),
        })
    }

    fn load<T: Record>(&self, path: &Path) -> Result<Vec<T>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        if bytes.len() % T::SIZE != 0 {
            return Err(StoreError::Corrupt {
                path: path.to_path_buf(),
                len: bytes.len(),
                record_size: T::SIZE,
            });
        }

        bytes
            .chunks_exact(T::SIZE)
            .enumerate()
            .map(|(index, chunk)| {
                T::decode(chunk).map_err(|reason| StoreError::InvalidRecord {
                    path: path.to_path_buf(),
                    index,
                    reason,
                })
            })
            .collect()
    }

    fn append<T: Record>(&self, path: &Path, record: &T) -> Result<()> {
        let mut bytes = Vec::with_capacity(T::SIZE);
        record.encode(&mut bytes);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| StoreError::io(path, e))?;
        file.write_all(&bytes).map_err(|e| StoreError::io(path, e))
    }

    fn overwrite<T: Record>(&self, path: &Path, records: &[T]) -> Result<()> {
        fs::write(path, encode_all(records)).map_err(|e| StoreError::io(path, e))
    }
}

impl PlayerRepository for FileStore {
    fn load_players(&self) -> Result<Vec<Player>> {
        self.load(&self.config.users_file)
    }

    fn find_player(&self, nickname: &str) -> Result<Option<Player>> {
        Ok(self
            .load_players()?
            .into_iter()
            .find(|player| player.nickname() == nickname))
    }

    /// The first player ever registered is the administrator.
    fn register_player(&self, nickname: &str) -> Result<Player> {
        let players = self.load_players()?;
        if players.iter().any(|player| player.nickname() == nickname) {
            return Err(StoreError::DuplicatePlayer(nickname.to_string()));
        }

        let player = Player::new(nickname, players.is_empty())?;
        self.append(&self.config.users_file, &player)?;
        info!(nickname, is_admin = player.is_admin(), "player registered");
        Ok(player)
    }

    /// Store `score` as the player's best if it beats the stored one.
    fn save_best_score(&self, nickname: &str, score: u32) -> Result<bool> {
        let mut players = self.load_players()?;
        let player = players
            .iter_mut()
            .find(|player| player.nickname() == nickname)
            .ok_or_else(|| StoreError::PlayerNotFound(nickname.to_string()))?;

        if !player.record_score(score) {
            return Ok(false);
        }

        self.overwrite(&self.config.users_file, &players)?;
        Ok(true)
    }
}

impl QuestionRepository for FileStore {
    fn load_questions(&self) -> Result<Vec<Question>> {
        self.load(&self.config.questions_file)
    }

    /// Append a question numbered one past the highest stored id.
    fn add_question(&self, draft: QuestionDraft) -> Result<Question> {
        let next_id = self
            .load_questions()?
            .iter()
            .map(Question::id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);

        let question = Question::new(
            next_id,
            draft.theme,
            draft.difficulty,
            draft.prompt,
            draft.answer,
        )?;
        self.append(&self.config.questions_file, &question)?;
        info!(id = question.id(), "question added");
        Ok(question)
    }

    fn replace_questions(&self, questions: &[Question]) -> Result<()> {
        self.overwrite(&self.config.questions_file, questions)
    }
}

impl HistoryRepository for FileStore {
    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        self.load(&self.config.history_file)
    }

    fn append_history(&self, entry: &HistoryEntry) -> Result<()> {
        self.append(&self.config.history_file, entry)
    }
}
