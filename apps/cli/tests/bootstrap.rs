//! Question bank bootstrap from a text import file.

mod common;

use std::fs;
use std::io::Cursor;

use pretty_assertions::assert_eq;
use quiz_core::Difficulty;
use quizbot_cli::commands;
use quizbot_cli::config::StorageConfig;
use quizbot_cli::console::Console;
use quizbot_cli::state::AppState;
use quizbot_cli::store::{Bootstrap, FileStore, QuestionRepository};
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::fixtures;

#[test]
fn imported_bank_is_playable() {
    let dir = tempfile::tempdir().unwrap();
    let import = dir.path().join("banque.txt");
    fs::write(&import, fixtures::import_file_content()).unwrap();

    let config = StorageConfig::in_dir(dir.path().join("data")).with_import_file(&import);
    let store = FileStore::open(config).unwrap();

    assert_eq!(
        store.bootstrap_questions().unwrap(),
        Bootstrap::Imported {
            imported: 3,
            skipped: 1,
        }
    );

    let questions = store.load_questions().unwrap();
    let ids: Vec<u32> = questions.iter().map(|q| q.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(questions[2].difficulty(), Difficulty::Hard);
    assert_eq!(questions[2].theme(), "Histoire");

    let state = AppState::new(store, 10);
    let input = ["alice", "1", "3", "de Vinci", "0"].join("\n");
    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    let mut rng = StdRng::seed_from_u64(1);

    commands::session(&mut console, &state, &mut rng).unwrap();

    let out = common::printed(&console);
    assert!(out.contains("Q1 [Histoire] : Qui a peint la Joconde ?"));
    assert!(out.contains("BRAVO !"));
    assert!(out.contains("Score : 1 / 1"));
}

#[test]
fn second_start_keeps_the_stored_bank() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::in_dir(dir.path());
    fs::write(&config.import_file, fixtures::import_file_content()).unwrap();

    let store = FileStore::open(config.clone()).unwrap();
    store.bootstrap_questions().unwrap();
    store
        .add_question(quizbot_cli::store::QuestionDraft {
            theme: "Sport".into(),
            difficulty: Difficulty::Easy,
            prompt: "Combien de joueurs dans une equipe de football ?".into(),
            answer: "11|onze".into(),
        })
        .unwrap();

    let reopened = FileStore::open(config).unwrap();
    assert_eq!(
        reopened.bootstrap_questions().unwrap(),
        Bootstrap::AlreadyFilled(4)
    );
    assert_eq!(reopened.load_questions().unwrap()[3].id(), 4);
}
