//! Local alignment scoring (Smith-Waterman).
//!
//! Experimental alternative to the edit-distance scorer. Local alignment
//! rewards the best contiguous overlap and ignores unmatched prefixes and
//! suffixes, which makes it more forgiving than whole-string edit distance
//! for long candidate fields. Not on the default scoring path.

use crate::normalize::fold;

const MATCH_WEIGHT: i32 = 2;
const MISMATCH_PENALTY: i32 = 1;
const GAP_PENALTY: i32 = 1;

/// Scores `query` against `text` with Smith-Waterman local alignment.
///
/// Matrix cells are floored at zero, so an alignment only extends while it
/// improves. The best cell is normalized against a perfect score of
/// `len(query) * match_weight`.
///
/// # Returns
/// A score in `0.0..=1.0`, where 1.0 means the whole query aligns exactly
pub fn local_alignment_score(text: &str, query: &str) -> f64 {
    if text.is_empty() || query.is_empty() {
        return 0.0;
    }

    let t_chars: Vec<char> = fold(text).chars().collect();
    let q_chars: Vec<char> = fold(query).chars().collect();

    if t_chars.is_empty() || q_chars.is_empty() {
        return 0.0;
    }

    // Only the best cell is needed, so two rolling rows suffice.
    let mut prev = vec![0i32; t_chars.len() + 1];
    let mut curr = vec![0i32; t_chars.len() + 1];
    let mut best = 0i32;

    for i in 1..=q_chars.len() {
        for j in 1..=t_chars.len() {
            let cost = if q_chars[i - 1] == t_chars[j - 1] {
                MATCH_WEIGHT
            } else {
                -MISMATCH_PENALTY
            };

            let score = (prev[j - 1] + cost)
                .max(prev[j] - GAP_PENALTY)
                .max(curr[j - 1] - GAP_PENALTY)
                .max(0);

            curr[j] = score;

            if score > best {
                best = score;
            }
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let perfect = (q_chars.len() as i32 * MATCH_WEIGHT) as f64;

    f64::from(best) / perfect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_perfect() {
        assert_eq!(local_alignment_score("bird", "bird"), 1.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(local_alignment_score("", "bird"), 0.0);
        assert_eq!(local_alignment_score("bird", ""), 0.0);
    }

    #[test]
    fn test_substring_aligns_fully() {
        // "bird" appears contiguously, so the local alignment is perfect
        // even though the text is much longer.
        assert_eq!(local_alignment_score("bird_colony", "bird"), 1.0);
    }

    #[test]
    fn test_disjoint_strings_score_low() {
        let score = local_alignment_score("zzzz", "bird");
        assert!(score < 0.5);
    }

    #[test]
    fn test_gap_tolerated() {
        // One gap inside the match costs a penalty but most of the query
        // still aligns.
        let score = local_alignment_score("frxog", "frog");
        assert!(score > 0.5 && score < 1.0);
    }

    #[test]
    fn test_score_in_unit_range() {
        for (text, query) in [
            ("stonehenge", "stone"),
            ("a", "abcdefgh"),
            ("the little children", "children"),
        ] {
            let score = local_alignment_score(text, query);
            assert!((0.0..=1.0).contains(&score), "{text} / {query}: {score}");
        }
    }
}
