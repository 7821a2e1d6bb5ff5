//! Line-oriented terminal prompts.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Blocking console over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Show `message` and read one line, trimmed. `None` once input is closed.
    ///
    /// Bytes that are not UTF-8, as sent by a Latin-1 terminal, are replaced
    /// rather than rejected.
    pub fn read_line(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Ask until an integer in `min..=max` is typed. `None` once input is closed.
    pub fn read_int(&mut self, min: i64, max: i64, message: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(message)? else {
                return Ok(None);
            };

            match line.parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                _ => self.say(format_args!(
                    "Erreur : Veuillez entrer un nombre entre {min} et {max}."
                ))?,
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
