//! Parser for question import files.
//!
//! # Format
//! ```text
//! # theme;difficulty;prompt;answers
//! Géographie;1;Quelle est la capitale de la France ?;Paris
//! Histoire;2;Qui était surnommé l'Empereur ?;Napoléon|Bonaparte
//! Sciences;1;L'eau bout à 100 degrés au niveau de la mer.;VRAI
//! ```
//!
//! Lines starting with `#` and lines shorter than five characters are ignored.
//! Broken lines are skipped and reported, they never stop the import.

use crate::error::{ParseError, Result};
use crate::types::{Difficulty, Question};

/// Field separator of the import format.
pub const FIELD_SEPARATOR: char = ';';

const MIN_LINE_LEN: usize = 5;

/// Questions read from an import file, plus the lines that were skipped.
#[derive(Debug, Default)]
pub struct Import {
    pub questions: Vec<Question>,
    pub skipped: Vec<ParseError>,
}

/// Parse import file content. Questions are numbered from 1 in file order.
pub fn parse(content: &str) -> Import {
    let mut import = Import::default();
    let mut next_id = 1;

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim_end_matches('\r');

        if is_ignored(line) {
            continue;
        }

        match parse_line(line, line_num, next_id) {
            Ok(question) => {
                import.questions.push(question);
                next_id += 1;
            }
            Err(e) => import.skipped.push(e),
        }
    }

    import
}

fn is_ignored(line: &str) -> bool {
    line.starts_with('#') || line.chars().count() < MIN_LINE_LEN
}

fn parse_line(line: &str, line_num: usize, id: u32) -> Result<Question> {
    let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
    let mut next_field = |field: &'static str| {
        fields
            .next()
            .filter(|value| !value.is_empty())
            .ok_or(ParseError::MissingField {
                line: line_num,
                field,
            })
    };

    let theme = next_field("theme")?;
    let difficulty = next_field("difficulty")?;
    let prompt = next_field("prompt")?;
    let answer = next_field("answer")?;

    let difficulty = difficulty
        .parse::<i64>()
        .ok()
        .and_then(|value| Difficulty::from_value(value).ok())
        .ok_or_else(|| ParseError::InvalidDifficulty {
            line: line_num,
            value: difficulty.to_string(),
        })?;

    Question::new(id, theme, difficulty, prompt, answer).map_err(|source| {
        ParseError::InvalidQuestion {
            line: line_num,
            source,
        }
    })
}
