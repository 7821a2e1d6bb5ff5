//! Fixed-size binary layouts of the stored records.
//!
//! Integers are little-endian, text fields are UTF-8 padded with NUL bytes.
//!
//! | Record | Layout | Size |
//! |---|---|---|
//! | Player | nickname[64], is_admin i32, best_score i32 | 72 |
//! | Question | id i32, difficulty i32, kind i32, theme[64], prompt[256], answer[256] | 588 |
//! | HistoryEntry | timestamp i64, nickname[64], score i32, difficulty i32 | 80 |

use super::error::RecordError;
use chrono::DateTime;
use quiz_core::{Difficulty, DifficultyChoice, HistoryEntry, Player, Question};

const NICKNAME_WIDTH: usize = 64;
const THEME_WIDTH: usize = 64;
const PROMPT_WIDTH: usize = 256;
const ANSWER_WIDTH: usize = 256;

/// Only free-text questions exist.
const QUESTION_KIND_TEXT: i32 = 0;

/// A value stored as one fixed-size record.
pub trait Record: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Append exactly `SIZE` bytes to `out`.
    fn encode(&self, out: &mut Vec<u8>);

    /// Decode one record; `bytes` is exactly `SIZE` long.
    fn decode(bytes: &[u8]) -> Result<Self, RecordError>;
}

impl Record for Player {
    const SIZE: usize = NICKNAME_WIDTH + 4 + 4;

    fn encode(&self, out: &mut Vec<u8>) {
        put_text(out, self.nickname(), NICKNAME_WIDTH);
        put_i32(out, i32::from(self.is_admin()));
        put_u32(out, self.best_score());
    }

    fn decode(bytes: &[u8]) -> Result<Self, RecordError> {
        let mut reader = Reader::new(bytes);
        let nickname = reader.text(NICKNAME_WIDTH);
        let is_admin = reader.i32() != 0;
        let best_score = reader.u32("best score")?;
        Ok(Player::with_best_score(nickname, is_admin, best_score)?)
    }
}

impl Record for Question {
    const SIZE: usize = 4 + 4 + 4 + THEME_WIDTH + PROMPT_WIDTH + ANSWER_WIDTH;

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.id());
        put_i32(out, i32::from(self.difficulty().to_value()));
        put_i32(out, QUESTION_KIND_TEXT);
        put_text(out, self.theme(), THEME_WIDTH);
        put_text(out, self.prompt(), PROMPT_WIDTH);
        put_text(out, self.answer(), ANSWER_WIDTH);
    }

    fn decode(bytes: &[u8]) -> Result<Self, RecordError> {
        let mut reader = Reader::new(bytes);
        let id = reader.u32("id")?;
        let difficulty = Difficulty::from_value(i64::from(reader.i32()))?;
        let _kind = reader.i32();
        let theme = reader.text(THEME_WIDTH);
        let prompt = reader.text(PROMPT_WIDTH);
        let answer = reader.text(ANSWER_WIDTH);
        Ok(Question::new(id, theme, difficulty, prompt, answer)?)
    }
}

impl Record for HistoryEntry {
    const SIZE: usize = 8 + NICKNAME_WIDTH + 4 + 4;

    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.played_at().timestamp().to_le_bytes());
        put_text(out, self.nickname(), NICKNAME_WIDTH);
        put_u32(out, self.score());
        put_i32(out, i32::from(self.difficulty().to_value()));
    }

    fn decode(bytes: &[u8]) -> Result<Self, RecordError> {
        let mut reader = Reader::new(bytes);
        let timestamp = reader.i64();
        let played_at =
            DateTime::from_timestamp(timestamp, 0).ok_or(RecordError::Timestamp(timestamp))?;
        let nickname = reader.text(NICKNAME_WIDTH);
        let score = reader.u32("score")?;
        let difficulty = DifficultyChoice::from_value(i64::from(reader.i32()))?;
        Ok(HistoryEntry::new(played_at, nickname, score, difficulty)?)
    }
}

/// Encode a slice of records back to back.
pub fn encode_all<T: Record>(records: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(records.len() * T::SIZE);
    for record in records {
        record.encode(&mut out);
    }
    out
}

fn put_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Unsigned values are stored in signed slots; anything past `i32::MAX` saturates.
fn put_u32(out: &mut Vec<u8>, value: u32) {
    put_i32(out, i32::try_from(value).unwrap_or(i32::MAX));
}

/// Write `text` into a `width`-byte slot, always leaving a trailing NUL.
fn put_text(out: &mut Vec<u8>, text: &str, width: usize) {
    let mut len = text.len().min(width - 1);
    while !text.is_char_boundary(len) {
        len -= 1;
    }
    out.extend_from_slice(&text.as_bytes()[..len]);
    out.resize(out.len() + width - len, 0);
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        buf
    }

    fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }

    fn i64(&mut self) -> i64 {
        i64::from_le_bytes(self.take())
    }

    fn u32(&mut self, field: &'static str) -> Result<u32, RecordError> {
        let value = self.i32();
        u32::try_from(value).map_err(|_| RecordError::Negative {
            field,
            value: i64::from(value),
        })
    }

    /// Text up to the first NUL; bytes that are not UTF-8 are replaced.
    fn text(&mut self, width: usize) -> String {
        let slot = &self.bytes[self.pos..self.pos + width];
        self.pos += width;
        let end = slot.iter().position(|&b| b == 0).unwrap_or(width);
        String::from_utf8_lossy(&slot[..end]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use quiz_core::ValidationError;

    fn encoded<T: Record>(record: &T) -> Vec<u8> {
        let mut out = Vec::new();
        record.encode(&mut out);
        out
    }

    #[test]
    fn record_sizes_match_layout() {
        assert_eq!(Player::SIZE, 72);
        assert_eq!(Question::SIZE, 588);
        assert_eq!(HistoryEntry::SIZE, 80);
    }

    #[test]
    fn player_layout() {
        let player = Player::with_best_score("alice", true, 7).unwrap();
        let bytes = encoded(&player);

        assert_eq!(bytes.len(), Player::SIZE);
        assert_eq!(&bytes[..5], b"alice");
        assert!(bytes[5..64].iter().all(|&b| b == 0));
        assert_eq!(&bytes[64..68], &1i32.to_le_bytes());
        assert_eq!(&bytes[68..72], &7i32.to_le_bytes());
        assert_eq!(Player::decode(&bytes).unwrap(), player);
    }

    #[test]
    fn question_keeps_accents_and_variants() {
        let question = Question::new(
            12,
            "Géographie",
            Difficulty::Hard,
            "Où se trouve le Mont Saint-Michel ?",
            "Normandie|en Normandie",
        )
        .unwrap();
        let bytes = encoded(&question);

        assert_eq!(bytes.len(), Question::SIZE);
        assert_eq!(&bytes[4..8], &3i32.to_le_bytes());
        assert_eq!(&bytes[8..12], &0i32.to_le_bytes());
        assert_eq!(Question::decode(&bytes).unwrap(), question);
    }

    #[test]
    fn history_timestamp_is_unix_seconds() {
        let played_at = Utc.with_ymd_and_hms(2024, 3, 1, 20, 15, 0).unwrap();
        let entry = HistoryEntry::new(played_at, "bob", 4, DifficultyChoice::Mixed).unwrap();
        let bytes = encoded(&entry);

        assert_eq!(bytes.len(), HistoryEntry::SIZE);
        assert_eq!(&bytes[..8], &played_at.timestamp().to_le_bytes());
        assert_eq!(&bytes[76..80], &4i32.to_le_bytes());
        assert_eq!(HistoryEntry::decode(&bytes).unwrap(), entry);
    }

    #[test]
    fn full_width_nickname_keeps_trailing_nul() {
        let nickname = "n".repeat(63);
        let bytes = encoded(&Player::new(nickname.as_str(), false).unwrap());
        assert_eq!(bytes[63], 0);
        assert_eq!(Player::decode(&bytes).unwrap().nickname(), nickname);
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        let question = Question::new(1, "T", Difficulty::Easy, "Q ?", "R").unwrap();
        let mut bytes = encoded(&question);
        bytes[4..8].copy_from_slice(&9i32.to_le_bytes());

        assert_eq!(
            Question::decode(&bytes).unwrap_err(),
            RecordError::Field(ValidationError::DifficultyOutOfRange(9))
        );
    }

    #[test]
    fn rejects_negative_score() {
        let mut bytes = encoded(&Player::new("carol", false).unwrap());
        bytes[68..72].copy_from_slice(&(-2i32).to_le_bytes());

        assert_eq!(
            Player::decode(&bytes).unwrap_err(),
            RecordError::Negative {
                field: "best score",
                value: -2
            }
        );
    }

    #[test]
    fn rejects_blank_nickname() {
        let bytes = vec![0u8; Player::SIZE];
        assert_eq!(
            Player::decode(&bytes).unwrap_err(),
            RecordError::Field(ValidationError::Empty { field: "nickname" })
        );
    }

    #[test]
    fn legacy_latin1_text_is_decoded_lossily() {
        let mut bytes = encoded(&Player::new("ren", false).unwrap());
        bytes[3] = 0xE9; // 'é' in Latin-1
        let player = Player::decode(&bytes).unwrap();
        assert_eq!(player.nickname(), "ren\u{FFFD}");
    }
}
