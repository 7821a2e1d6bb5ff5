//! Administration menu.

use crate::console::Console;
use crate::error::Result;
use crate::state::AppState;
use crate::store::{QuestionDraft, QuestionRepository, StoreError};
use quiz_core::{Difficulty, Player};
use std::io::{BufRead, Write};

/// Administration loop; only reachable by administrators.
pub fn admin_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
    player: &Player,
) -> Result<()> {
    loop {
        console.say(format_args!(
            "\n=== ADMINISTRATION ({}) ===\n1. Ajouter une question\n2. Retour",
            player.nickname()
        ))?;

        match console.read_int(1, 2, "Choix : ")? {
            Some(1) => add_question(console, state)?,
            _ => return Ok(()),
        }
    }
}

fn add_question<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &AppState,
) -> Result<()> {
    let Some(theme) = console.read_line("Theme : ")? else {
        return Ok(());
    };
    let Some(prompt) = console.read_line("Question : ")? else {
        return Ok(());
    };
    let Some(answer) = console.read_line("Reponse(s) : ")? else {
        return Ok(());
    };
    let Some(difficulty) = console.read_int(1, 3, "Difficulte (1-3) : ")? else {
        return Ok(());
    };

    let draft = QuestionDraft {
        theme,
        difficulty: Difficulty::from_value(difficulty)?,
        prompt,
        answer,
    };

    match state.store.add_question(draft) {
        Ok(question) => console.say(format_args!("Question ajoutee ! (n°{})", question.id()))?,
        Err(StoreError::InvalidData(e)) => console.say(format_args!("Question refusee : {e}"))?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
