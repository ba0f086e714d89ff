//! Levenshtein edit distance and similarity.

use crate::normalize::fold;

/// Low-level edit distance over char slices with caller-supplied DP rows.
///
/// The two rows are cleared and refilled on every call, so a caller scoring
/// one query against many candidates can reuse the same allocations.
pub(crate) fn distance_chars(
    a: &[char],
    b: &[char],
    prev: &mut Vec<usize>,
    curr: &mut Vec<usize>,
) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    prev.clear();
    prev.extend(0..=n);
    curr.clear();
    curr.resize(n + 1, 0);

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(prev, curr);
    }

    prev[n]
}

/// Calculates the Levenshtein edit distance between two strings.
///
/// Uses a rolling two-row table, so memory is `O(len(b))` while time is
/// `O(len(a) * len(b))`. Costs are 1 for insertion, deletion, and
/// substitution.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform `a` into `b`
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev = Vec::new();
    let mut curr = Vec::new();

    distance_chars(&a_chars, &b_chars, &mut prev, &mut curr)
}

/// Calculates a similarity score between two strings from their edit
/// distance: `1 - distance / max(len(a), len(b))`.
///
/// Both operands are folded (case- and diacritic-insensitive) before
/// comparison. Two empty strings are a perfect match.
///
/// # Returns
/// A score in `0.0..=1.0`, where 1.0 is identical
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let a = fold(a);
    let b = fold(b);

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(&a, &b) as f64 / max_len as f64
}
