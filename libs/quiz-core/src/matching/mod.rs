//! Answer matching for free-text questions.
//!
//! A typed answer is accepted when, after normalization, it equals one of the
//! expected variants, contains a long enough variant, or is within an edit
//! distance that grows with the variant's length.

pub mod distance;
pub mod normalize;

pub use distance::levenshtein_distance;
pub use normalize::normalize;

use crate::error::MatchError;
use serde::{Deserialize, Serialize};

/// Separator between acceptable variants of an expected answer.
pub const VARIANT_SEPARATOR: char = '|';

/// Variants at most this long must match exactly or by edit distance.
const MIN_CONTAINED_LEN: usize = 3;

/// Which rule accepted an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum MatchRule {
    Exact,
    Contains,
    Fuzzy { distance: usize, tolerance: usize },
}

/// Result of comparing a typed answer to the expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Rule that accepted the answer.
    pub rule: Option<MatchRule>,
    /// Normalized variant the answer matched.
    pub matched_variant: Option<String>,
    /// Normalized typed answer, after V/F expansion.
    pub typed_normalized: String,
}

impl MatchResult {
    fn rejected(typed_normalized: String) -> Self {
        Self {
            is_correct: false,
            rule: None,
            matched_variant: None,
            typed_normalized,
        }
    }
}

/// Maximum edit distance accepted for a normalized variant of `len` characters.
pub fn tolerance_for(len: usize) -> usize {
    match len {
        0..=5 => 1,
        6..=9 => 2,
        _ => 3,
    }
}

/// Split an expected answer into its variants, in stored order.
pub fn variants(expected: &str) -> impl Iterator<Item = &str> {
    expected.split(VARIANT_SEPARATOR)
}

/// Whether `typed` is an acceptable answer for `expected`.
pub fn is_accepted(typed: &str, expected: &str) -> Result<bool, MatchError> {
    match_answer(typed, expected).map(|result| result.is_correct)
}

/// Compare a typed answer to every variant of the expected answer.
pub fn match_answer(typed: &str, expected: &str) -> Result<MatchResult, MatchError> {
    let typed_normalized = expand_true_false(normalize(typed), expected);

    for variant in variants(expected) {
        let variant = normalize(variant);
        if variant.is_empty() {
            continue;
        }

        if let Some(rule) = match_variant(&typed_normalized, &variant)? {
            return Ok(MatchResult {
                is_correct: true,
                rule: Some(rule),
                matched_variant: Some(variant),
                typed_normalized,
            });
        }
    }

    Ok(MatchResult::rejected(typed_normalized))
}

/// `V` and `F` stand for `VRAI` and `FAUX` on true/false questions.
fn expand_true_false(typed: String, expected: &str) -> String {
    if expected != "VRAI" && expected != "FAUX" {
        return typed;
    }

    match typed.as_str() {
        "V" => "VRAI".to_string(),
        "F" => "FAUX".to_string(),
        _ => typed,
    }
}

fn match_variant(typed: &str, variant: &str) -> Result<Option<MatchRule>, MatchError> {
    if typed == variant {
        return Ok(Some(MatchRule::Exact));
    }

    if variant.len() > MIN_CONTAINED_LEN && typed.contains(variant) {
        return Ok(Some(MatchRule::Contains));
    }

    let tolerance = tolerance_for(variant.len());
    let distance = levenshtein_distance(typed, variant)?;
    if distance <= tolerance {
        return Ok(Some(MatchRule::Fuzzy {
            distance,
            tolerance,
        }));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn accepted(typed: &str, expected: &str) -> bool {
        is_accepted(typed, expected).unwrap()
    }

    #[test]
    fn exact_after_normalization() {
        assert!(accepted("Paris", "Paris|PARIS"));
        assert!(accepted("  paris !", "Paris"));

        let result = match_answer("Paris", "Paris|PARIS").unwrap();
        assert_eq!(result.rule, Some(MatchRule::Exact));
        assert_eq!(result.matched_variant.as_deref(), Some("PARIS"));
    }

    #[test]
    fn variant_inside_a_sentence() {
        assert!(accepted("c'est paris je crois", "Paris"));

        let result = match_answer("c'est paris je crois", "Paris").unwrap();
        assert_eq!(result.rule, Some(MatchRule::Contains));
    }

    #[test]
    fn short_variant_is_not_searched_inside_sentence() {
        // "ROI" is only three characters long, so containment does not apply.
        assert!(!accepted("le grand roi soleil", "Roi"));
        assert!(accepted("Roi", "Roi"));
    }

    #[test]
    fn true_false_shorthand() {
        assert!(accepted("V", "VRAI"));
        assert!(accepted("f", "FAUX"));
        assert!(!accepted("V", "FAUX"));

        let result = match_answer("v", "VRAI").unwrap();
        assert_eq!(result.typed_normalized, "VRAI");
    }

    #[test]
    fn shorthand_only_for_plain_true_false_answers() {
        let result = match_answer("V", "VRAI|OUI").unwrap();
        assert_eq!(result.typed_normalized, "V");

        // A lowercase expected answer is not a true/false question either.
        let result = match_answer("V", "vrai").unwrap();
        assert_eq!(result.typed_normalized, "V");
    }

    #[test]
    fn typo_within_tolerance() {
        assert!(accepted("Pari", "Paris"));

        let result = match_answer("Pari", "Paris").unwrap();
        assert_eq!(
            result.rule,
            Some(MatchRule::Fuzzy {
                distance: 1,
                tolerance: 1
            })
        );
    }

    #[test]
    fn unrelated_answer_rejected() {
        assert!(!accepted("xyz", "Paris"));

        let result = match_answer("xyz", "Paris").unwrap();
        assert_eq!(result, MatchResult::rejected("XYZ".to_string()));
    }

    #[test]
    fn later_variant_can_match() {
        assert!(accepted("Napoleon", "Bonaparte|Napoléon|Napoleon Ier"));
        let result = match_answer("Napoleon", "Bonaparte|Napoleon Ier").unwrap();
        assert_eq!(result.matched_variant.as_deref(), Some("NAPOLEONIER"));
    }

    #[test]
    fn tolerance_table() {
        assert_eq!(tolerance_for(1), 1);
        assert_eq!(tolerance_for(5), 1);
        assert_eq!(tolerance_for(6), 2);
        assert_eq!(tolerance_for(9), 2);
        assert_eq!(tolerance_for(10), 3);
        assert_eq!(tolerance_for(40), 3);
    }

    #[test]
    fn tolerance_boundary_five_six() {
        // Five characters: one edit allowed, two refused.
        assert!(accepted("ABCDX", "ABCDE"));
        assert!(!accepted("ABCXY", "ABCDE"));
        // Six characters: two edits allowed, three refused.
        assert!(accepted("ABCDXY", "ABCDEF"));
        assert!(!accepted("ABCXYZ", "ABCDEF"));
    }

    #[test]
    fn tolerance_boundary_nine_ten() {
        assert!(accepted("ABCDEFGXY", "ABCDEFGHI"));
        assert!(!accepted("ABCDEFXYZ", "ABCDEFGHI"));
        assert!(accepted("ABCDEFGXYZ", "ABCDEFGHIJ"));
        assert!(!accepted("ABCDEFWXYZ", "ABCDEFGHIJ"));
    }

    #[test]
    fn blank_answer_goes_through_edit_distance() {
        // One insertion away from a one-character variant.
        assert!(accepted("", "4"));
        assert!(accepted(" ?! ", "A"));
        assert!(!accepted("", "Paris"));

        let result = match_answer("", "8|huit").unwrap();
        assert_eq!(
            result.rule,
            Some(MatchRule::Fuzzy {
                distance: 1,
                tolerance: 1
            })
        );
        assert_eq!(result.matched_variant.as_deref(), Some("8"));
    }

    #[test]
    fn empty_variants_are_skipped() {
        assert!(!accepted("X", "Paris||"));
        assert!(accepted("Lyon", "Paris||Lyon"));
    }
}
