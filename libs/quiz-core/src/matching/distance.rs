//! Levenshtein edit distance.

use crate::error::MatchError;

/// Calculate Levenshtein distance between two strings.
///
/// Only two rows of the cost grid are kept, sized after the shorter input.
/// Working memory is reserved fallibly so an allocation failure comes back as
/// [`MatchError::OutOfMemory`] instead of a wrong distance.
pub fn levenshtein_distance(a: &str, b: &str) -> Result<usize, MatchError> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Distance is symmetric: iterate over the longer string, index the shorter one.
    let (outer, inner, inner_len) = if a_len >= b_len {
        (a, b, b_len)
    } else {
        (b, a, a_len)
    };

    if inner_len == 0 {
        return Ok(a_len.max(b_len));
    }

    let mut inner_chars = Vec::new();
    inner_chars.try_reserve_exact(inner_len)?;
    inner_chars.extend(inner.chars());

    let mut prev = Vec::new();
    prev.try_reserve_exact(inner_len + 1)?;
    prev.extend(0..=inner_len);

    let mut curr = Vec::new();
    curr.try_reserve_exact(inner_len + 1)?;
    curr.resize(inner_len + 1, 0);

    for (i, outer_char) in outer.chars().enumerate() {
        curr[0] = i + 1;

        for j in 1..=inner_len {
            let cost = if outer_char == inner_chars[j - 1] { 0 } else { 1 };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[inner_len])
}
