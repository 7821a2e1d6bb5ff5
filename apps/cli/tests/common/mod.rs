//! Common test utilities for the game integration tests.
//!
//! Provides:
//! - TestContext owning a temporary data directory and the record store
//! - Helpers to drive a whole session from scripted input

pub mod fixtures;

use std::io::Cursor;

use quizbot_cli::commands;
use quizbot_cli::config::StorageConfig;
use quizbot_cli::console::Console;
use quizbot_cli::state::AppState;
use quizbot_cli::store::{FileStore, QuestionRepository};
use quiz_core::Question;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Temporary data directory with an opened store.
pub struct TestContext {
    pub dir: TempDir,
    pub state: AppState,
    rng: StdRng,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_max_questions(10)
    }

    pub fn with_max_questions(max_questions_per_game: usize) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FileStore::open(StorageConfig::in_dir(dir.path())).expect("open store");
        Self {
            dir,
            state: AppState::new(store, max_questions_per_game),
            rng: StdRng::seed_from_u64(42),
        }
    }

    /// Context whose bank already holds `questions`.
    pub fn with_questions(questions: &[Question]) -> Self {
        let ctx = Self::new();
        ctx.state
            .store
            .replace_questions(questions)
            .expect("store questions");
        ctx
    }

    /// Console fed with `lines`, one per prompt.
    pub fn console(lines: &[&str]) -> TestConsole {
        let mut input = lines.join("\n");
        input.push('\n');
        Console::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    /// Run a full session on scripted input and return everything printed.
    pub fn run_session(&mut self, lines: &[&str]) -> String {
        let mut input = lines.join("\n");
        input.push('\n');
        self.run_session_bytes(input.as_bytes())
    }

    /// Same as [`run_session`](Self::run_session), on raw terminal bytes.
    pub fn run_session_bytes(&mut self, input: &[u8]) -> String {
        let mut console = Console::new(Cursor::new(input.to_vec()), Vec::new());
        commands::session(&mut console, &self.state, &mut self.rng).expect("session");
        printed(&console)
    }
}

pub fn printed(console: &TestConsole) -> String {
    String::from_utf8(console.output().clone()).expect("utf-8 output")
}
