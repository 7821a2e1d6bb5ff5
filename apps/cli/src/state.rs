//! Application state.

use crate::store::FileStore;

/// State shared by every command of a session.
pub struct AppState {
    pub store: FileStore,
    pub max_questions_per_game: usize,
}

impl AppState {
    pub fn new(store: FileStore, max_questions_per_game: usize) -> Self {
        Self {
            store,
            max_questions_per_game,
        }
    }
}
