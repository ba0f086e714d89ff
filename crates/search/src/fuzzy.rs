//! Fuzzy-match capability contract.
//!
//! The engine does not implement rich approximate matching itself. It calls
//! whatever implements [`FuzzyMatcher`]: an external engine injected at
//! construction, or the built-in [`EditDistanceMatcher`] fallback backed by
//! plain Levenshtein distance. Queries are prepared once per token and
//! scored against many candidates with a caller-owned scratch buffer, so
//! repeated calls allocate nothing.

use crate::config::EditDistanceConfig;
use crate::exact::contains_score;
use crate::levenshtein::distance_chars;
use crate::normalize::fold;

/// Precomputed form of one query token, reusable across candidates.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    normalized: String,
    chars: Vec<char>,
}

impl PreparedQuery {
    /// Folds and precomputes a query token.
    pub fn new(token: &str) -> Self {
        let normalized = fold(token);
        let chars = normalized.chars().collect();
        Self { normalized, chars }
    }

    /// The folded token text.
    pub fn text(&self) -> &str {
        &self.normalized
    }

    /// The folded token as chars.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Token length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the folded token is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Reusable scratch space for scoring calls.
///
/// Owned by the caller and passed into every [`FuzzyMatcher::score`] call.
/// Never share one buffer across concurrent calls; each thread or worker
/// owns its own instance.
#[derive(Debug, Default)]
pub struct ScoreBuffer {
    pub(crate) prev_row: Vec<usize>,
    pub(crate) curr_row: Vec<usize>,
    pub(crate) candidate: Vec<char>,
}

impl ScoreBuffer {
    /// Creates an empty buffer. Rows grow on first use and are reused after.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A pairwise fuzzy score with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyScore {
    /// Normalized score in `0.0..=1.0`.
    pub score: f64,
    /// Raw edit distance between the folded token and candidate.
    pub edit_distance: usize,
}

/// The approximate-matching capability.
///
/// Implementations score a prepared query token against one candidate
/// string, returning `None` when the pair falls below the engine's internal
/// floor. Implementations must be safe to call from multiple threads as
/// long as each caller owns its own [`ScoreBuffer`].
pub trait FuzzyMatcher: Send + Sync {
    /// Precomputes a query token for scoring against many candidates.
    fn prepare(&self, token: &str) -> PreparedQuery {
        PreparedQuery::new(token)
    }

    /// Scores `candidate` against a prepared token.
    fn score(
        &self,
        candidate: &str,
        query: &PreparedQuery,
        buffer: &mut ScoreBuffer,
    ) -> Option<FuzzyScore>;
}

/// Built-in approximate matcher backed by Levenshtein distance.
///
/// Stands in when no external fuzzy engine is injected. Whole-string edit
/// distance within the configured ceiling maps to `1 - distance / max_len`;
/// past the ceiling, substring containment still earns a weighted
/// positional score before the pair is rejected.
#[derive(Debug, Clone, Default)]
pub struct EditDistanceMatcher {
    config: EditDistanceConfig,
}

impl EditDistanceMatcher {
    /// Creates a matcher with the given tuning parameters.
    pub fn new(config: EditDistanceConfig) -> Self {
        Self { config }
    }
}

impl FuzzyMatcher for EditDistanceMatcher {
    fn score(
        &self,
        candidate: &str,
        query: &PreparedQuery,
        buffer: &mut ScoreBuffer,
    ) -> Option<FuzzyScore> {
        if query.is_empty() {
            return None;
        }

        let folded = fold(candidate);
        if folded.is_empty() {
            return None;
        }

        buffer.candidate.clear();
        buffer.candidate.extend(folded.chars());

        let distance = distance_chars(
            query.chars(),
            &buffer.candidate,
            &mut buffer.prev_row,
            &mut buffer.curr_row,
        );

        if distance == 0 {
            return Some(FuzzyScore {
                score: 1.0,
                edit_distance: 0,
            });
        }

        if distance <= self.config.max_distance_for(query.len()) {
            let max_len = query.len().max(buffer.candidate.len());
            let score = 1.0 - distance as f64 / max_len as f64;
            return Some(FuzzyScore {
                score: score.clamp(0.0, 1.0),
                edit_distance: distance,
            });
        }

        // Too many edits for whole-string similarity. A containment match
        // can still qualify, weighted down and position-adjusted.
        let base = contains_score(&folded, query.text());
        if base == 0.0 {
            return None;
        }

        let mut score = base * self.config.substring_weight;

        if folded.starts_with(query.text()) {
            score *= self.config.prefix_weight;
        } else {
            let byte_position = folded.find(query.text())?;
            let position = folded[..byte_position].chars().count();

            if position < self.config.first_match_bonus_range {
                score += self.config.first_match_bonus;
            }
            if starts_word(&folded, byte_position) {
                score += self.config.word_boundary_bonus;
            }
        }

        Some(FuzzyScore {
            score: score.clamp(0.0, 1.0),
            edit_distance: distance,
        })
    }
}

/// Returns true if the byte offset follows a separator character.
fn starts_word(text: &str, byte_position: usize) -> bool {
    text[..byte_position]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_whitespace() || c == '_' || c == '-' || c == '.')
}
