//! Canonical comparison form for answers.

/// Keep ASCII letters and digits only, uppercased.
///
/// Accented letters, punctuation and whitespace are dropped, so
/// `"C'est Paris !"` becomes `"CESTPARIS"`.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
