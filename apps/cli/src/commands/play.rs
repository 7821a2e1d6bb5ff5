//! A game of the quiz.

use crate::console::Console;
use crate::error::Result;
use crate::state::AppState;
use crate::store::{HistoryRepository, PlayerRepository, QuestionRepository};
use chrono::Utc;
use quiz_core::{
    match_answer, DifficultyChoice, HistoryEntry, MatchError, MatchResult, Player, Question,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// How a finished game went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub difficulty: DifficultyChoice,
    pub asked: usize,
    pub score: u32,
    /// Questions whose answer could not be checked.
    pub voided: usize,
    pub new_record: bool,
}

/// Play one game: pick a difficulty, answer shuffled questions, record the score.
///
/// Returns `None` when no game took place (empty bank, no question at the
/// chosen level, or input closed before the end).
pub fn play<R, W, G>(
    console: &mut Console<R, W>,
    state: &AppState,
    player: &mut Player,
    rng: &mut G,
) -> Result<Option<GameSummary>>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let questions = state.store.load_questions()?;
    if questions.is_empty() {
        console.say("Aucune question trouvee !")?;
        return Ok(None);
    }

    console.say("\n--- DIFFICULTE ---\n1. Facile\n2. Moyen\n3. Difficile\n4. Tout melanger")?;
    let Some(value) = console.read_int(1, 4, "Choix : ")? else {
        return Ok(None);
    };
    let difficulty = DifficultyChoice::from_value(value)?;

    let mut selection = select_questions(&questions, difficulty);
    if selection.is_empty() {
        console.say("Pas de questions pour ce niveau.")?;
        return Ok(None);
    }
    selection.shuffle(rng);
    selection.truncate(state.max_questions_per_game);

    let asked = selection.len();
    console.say(format_args!("\n=== C'EST PARTI ! ({asked} questions) ==="))?;

    let mut tally = Tally::default();
    for (n, question) in selection.iter().enumerate() {
        console.say(format_args!(
            "\nQ{} [{}] : {}",
            n + 1,
            question.theme(),
            question.prompt()
        ))?;

        let Some(answer) = console.read_line("Reponse > ")? else {
            info!(nickname = player.nickname(), "input closed, game abandoned");
            return Ok(None);
        };

        let checked = match_answer(&answer, question.answer());
        if let Err(e) = &checked {
            warn!(question = question.id(), error = %e, "answer could not be checked");
        }

        let counted = outcome(&checked);
        match counted {
            Outcome::Correct => {
                debug!(question = question.id(), "answer accepted");
                console.say("BRAVO !")?;
            }
            Outcome::Wrong => {
                console.say(format_args!(
                    "Dommage... La reponse etait : {}",
                    question.primary_answer()
                ))?;
            }
            Outcome::Voided => {
                console.say("Impossible de verifier la reponse, question annulee.")?;
            }
        }
        tally.add(counted);
    }

    let Tally { score, voided, .. } = tally;
    console.say(format_args!(
        "\n=== FIN DE PARTIE ===\nScore : {score} / {asked}"
    ))?;
    if voided > 0 {
        console.say(format_args!("({voided} question(s) annulee(s))"))?;
    }

    let entry = HistoryEntry::new(Utc::now(), player.nickname(), score, difficulty)?;
    state.store.append_history(&entry)?;

    let new_record = player.record_score(score);
    if new_record {
        console.say("Nouveau record personnel !")?;
        state.store.save_best_score(player.nickname(), score)?;
    }

    info!(
        nickname = player.nickname(),
        score,
        asked,
        difficulty = difficulty.to_value(),
        "game finished"
    );

    Ok(Some(GameSummary {
        difficulty,
        asked,
        score,
        voided,
        new_record,
    }))
}

/// How one typed answer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong,
    /// The answer could not be checked; the question is not scored.
    Voided,
}

/// Classify the result of checking one answer.
pub fn outcome(checked: &std::result::Result<MatchResult, MatchError>) -> Outcome {
    match checked {
        Ok(result) if result.is_correct => Outcome::Correct,
        Ok(_) => Outcome::Wrong,
        Err(_) => Outcome::Voided,
    }
}

/// Running count of a game's answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: u32,
    pub missed: usize,
    pub voided: usize,
}

impl Tally {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.score += 1,
            Outcome::Wrong => self.missed += 1,
            Outcome::Voided => self.voided += 1,
        }
    }
}

/// Questions of the chosen level, in bank order.
pub fn select_questions(questions: &[Question], difficulty: DifficultyChoice) -> Vec<&Question> {
    questions
        .iter()
        .filter(|question| difficulty.includes(question.difficulty()))
        .collect()
}
