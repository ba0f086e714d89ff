//! Positional/length substring heuristic.
//!
//! The exact matcher needs no approximate-matching capability: it rewards
//! substring containment, weighting matches that start earlier in the text
//! and queries that cover more of it.

use crate::normalize::fold;

/// Flat score awarded for any substring containment.
const BASE_SCORE: f64 = 0.5;
/// Weight of the proximity component (earlier matches score higher).
const PROXIMITY_WEIGHT: f64 = 0.5;
/// Weight of the length component (longer relative queries score higher).
const LENGTH_WEIGHT: f64 = 0.4;

/// Scores `query` against `text` by substring containment.
///
/// Both strings are folded before comparison, so matching is case- and
/// diacritic-insensitive. Returns 0.0 when either string is empty or the
/// query does not occur in the text, 1.0 on equality, and otherwise
/// `base + 0.5 * proximity + 0.4 * length`, clamped to `0.0..=1.0`.
///
/// # Example
/// ```
/// use querykit_search::contains_score;
///
/// assert_eq!(contains_score("bird", "bird"), 1.0);
/// assert_eq!(contains_score("bird", "fish"), 0.0);
/// assert!(contains_score("bird_colony", "bird") > 0.5);
/// ```
pub fn contains_score(text: &str, query: &str) -> f64 {
    if text.is_empty() || query.is_empty() {
        return 0.0;
    }

    let text = fold(text);
    let query = fold(query);

    if text == query {
        return 1.0;
    }

    let Some(byte_position) = text.find(&query) else {
        return 0.0;
    };

    let text_count = text.chars().count() as f64;
    let query_count = query.chars().count() as f64;

    // Proximity: match offset in chars over the last possible offset.
    // Lower position = higher score.
    let position = text[..byte_position].chars().count() as f64;
    let max_position = text_count - query_count + 1.0;
    let proximity_score = 1.0 - position / max_position;

    // Length: how much of the text the query covers.
    let length_score = query_count / text_count;

    let adjust = PROXIMITY_WEIGHT * proximity_score + LENGTH_WEIGHT * length_score;

    (BASE_SCORE + adjust).clamp(0.0, 1.0)
}
