//! Test fixtures and factory functions for creating test data.

use quiz_core::{Difficulty, Question};

/// Build a question, panicking on invalid input.
pub fn question(id: u32, difficulty: Difficulty, prompt: &str, answer: &str) -> Question {
    Question::new(id, "Culture", difficulty, prompt, answer).expect("valid question")
}

/// `count` easy questions that all accept the same answer.
pub fn same_answer_questions(count: u32, answer: &str) -> Vec<Question> {
    (1..=count)
        .map(|i| question(i, Difficulty::Easy, &format!("Question {i} ?"), answer))
        .collect()
}

/// A small bank with one question per level.
pub fn mixed_bank() -> Vec<Question> {
    vec![
        question(1, Difficulty::Easy, "Capitale de la France ?", "Paris"),
        question(2, Difficulty::Medium, "Le soleil est une étoile.", "VRAI"),
        question(3, Difficulty::Hard, "Auteur des Misérables ?", "Victor Hugo|Hugo"),
    ]
}

/// Import file content in the `theme;difficulty;prompt;answers` format.
pub fn import_file_content() -> String {
    [
        "# theme;difficulte;question;reponses",
        "Géographie;1;Capitale de la France ?;Paris",
        "Sciences;2;L'eau gèle à 0 degré Celsius.;VRAI",
        "",
        "Histoire;3;Qui a peint la Joconde ?;Léonard de Vinci|Vinci",
        "ligne sans separateur",
    ]
    .join("\n")
}
