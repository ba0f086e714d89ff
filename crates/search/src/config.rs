//! Match configuration.
//!
//! `MatchConfig` is the externally supplied knob surface: a minimum score,
//! an algorithm selection, and the primary-field boost. `EditDistanceConfig`
//! carries the tuning parameters consumed by edit-distance based matchers;
//! it is pure data with no behavior of its own, so richer external engines
//! can honor as many of its knobs as they implement.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Gap penalty shape for edit-distance matchers that model gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPenalty {
    /// Gaps are free.
    None,
    /// A flat penalty per gapped character.
    Linear { per_char: f64 },
    /// Opening a gap is expensive, extending it is cheap.
    Affine { open: f64, extend: f64 },
}

impl Default for GapPenalty {
    fn default() -> Self {
        GapPenalty::Affine {
            open: 0.2,
            extend: 0.05,
        }
    }
}

/// Tuning parameters for edit-distance based matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditDistanceConfig {
    /// Largest edit distance still considered a match.
    pub max_edit_distance: usize,
    /// Edit-distance ceiling used once a query reaches
    /// [`long_query_threshold`](Self::long_query_threshold) chars.
    pub long_query_max_edit_distance: usize,
    /// Query length (in chars) at which the long-query ceiling applies.
    pub long_query_threshold: usize,
    /// Multiplier applied when the query is a prefix of the candidate.
    pub prefix_weight: f64,
    /// Multiplier applied to substring-containment scores.
    pub substring_weight: f64,
    /// Additive bonus when the match starts at a word boundary.
    pub word_boundary_bonus: f64,
    /// Additive bonus per consecutive matched character.
    pub consecutive_bonus: f64,
    /// Penalty shape for gaps in the match.
    pub gap_penalty: GapPenalty,
    /// Additive bonus when the match starts within
    /// [`first_match_bonus_range`](Self::first_match_bonus_range) chars.
    pub first_match_bonus: f64,
    /// Char range within which the first-match bonus applies.
    pub first_match_bonus_range: usize,
    /// Penalty per candidate char beyond the query length.
    pub length_penalty: f64,
    /// Multiplier for acronym-style matches (first letters of words).
    pub acronym_weight: f64,
}

impl Default for EditDistanceConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            long_query_max_edit_distance: 3,
            long_query_threshold: 13,
            prefix_weight: 1.5,
            substring_weight: 1.0,
            word_boundary_bonus: 0.1,
            consecutive_bonus: 0.05,
            gap_penalty: GapPenalty::default(),
            first_match_bonus: 0.15,
            first_match_bonus_range: 10,
            length_penalty: 0.003,
            acronym_weight: 1.0,
        }
    }
}

impl EditDistanceConfig {
    /// Tighter matching: heavier gap penalties, no positional bonuses.
    pub fn tight() -> Self {
        Self {
            substring_weight: 0.7,
            word_boundary_bonus: 0.01,
            consecutive_bonus: 0.01,
            gap_penalty: GapPenalty::Affine {
                open: 0.3,
                extend: 0.01,
            },
            first_match_bonus: 0.0,
            ..Self::default()
        }
    }

    /// Tuned for as-you-type completion: strong prefix preference, only one
    /// edit tolerated.
    pub fn autocomplete() -> Self {
        Self {
            max_edit_distance: 1,
            prefix_weight: 2.0,
            substring_weight: 0.8,
            ..Self::default()
        }
    }

    /// Effective edit-distance ceiling for a query of `query_len` chars.
    pub fn max_distance_for(&self, query_len: usize) -> usize {
        if query_len >= self.long_query_threshold {
            self.long_query_max_edit_distance
        } else {
            self.max_edit_distance
        }
    }
}

/// Matching algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchAlgorithm {
    /// Positional/length substring heuristic, no fuzzy capability needed.
    ExactPositional,
    /// Edit-distance based approximate matching.
    EditDistance(EditDistanceConfig),
}

/// Configuration for one scoring call.
///
/// Immutable value passed per query. The default is the tight edit-distance
/// profile with a 0.7 floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Pairwise scores below this floor are discarded.
    pub minimum_score: f64,
    /// Which matcher scores each (token, field) pair.
    pub algorithm: MatchAlgorithm,
    /// Multiplier applied when a field equals the record's primary field.
    /// The result is clamped, so a boosted 1.0 stays 1.0.
    pub primary_field_boost: f64,
}

/// Default boost for matches on the record's primary field.
pub const DEFAULT_PRIMARY_FIELD_BOOST: f64 = 1.2;

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            minimum_score: 0.7,
            algorithm: MatchAlgorithm::EditDistance(EditDistanceConfig::tight()),
            primary_field_boost: DEFAULT_PRIMARY_FIELD_BOOST,
        }
    }
}

impl MatchConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidMinimumScore`] when `minimum_score` is
    /// outside `0.0..=1.0`.
    pub fn new(minimum_score: f64, algorithm: MatchAlgorithm) -> Result<Self> {
        let config = Self {
            minimum_score,
            algorithm,
            primary_field_boost: DEFAULT_PRIMARY_FIELD_BOOST,
        };
        config.validate()?;
        Ok(config)
    }

    /// Profile for as-you-type completion.
    pub fn autocomplete() -> Self {
        Self {
            minimum_score: 0.6,
            algorithm: MatchAlgorithm::EditDistance(EditDistanceConfig::autocomplete()),
            ..Self::default()
        }
    }

    /// Profile using only the positional substring heuristic.
    pub fn exact(minimum_score: f64) -> Result<Self> {
        Self::new(minimum_score, MatchAlgorithm::ExactPositional)
    }

    /// Checks that `minimum_score` is within `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.minimum_score) {
            return Err(SearchError::InvalidMinimumScore(self.minimum_score));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let config = MatchConfig::default();
        assert_eq!(config.minimum_score, 0.7);
        assert!(matches!(config.algorithm, MatchAlgorithm::EditDistance(_)));
        assert_eq!(config.primary_field_boost, DEFAULT_PRIMARY_FIELD_BOOST);
    }

    #[test]
    fn test_autocomplete_profile() {
        let config = MatchConfig::autocomplete();
        assert_eq!(config.minimum_score, 0.6);
        let MatchAlgorithm::EditDistance(edit) = config.algorithm else {
            panic!("expected edit-distance algorithm");
        };
        assert_eq!(edit.max_edit_distance, 1);
        assert_eq!(edit.prefix_weight, 2.0);
    }

    #[test]
    fn test_minimum_score_validation() {
        assert!(MatchConfig::new(0.5, MatchAlgorithm::ExactPositional).is_ok());
        assert!(MatchConfig::new(1.0, MatchAlgorithm::ExactPositional).is_ok());
        assert!(MatchConfig::new(1.2, MatchAlgorithm::ExactPositional).is_err());
        assert!(MatchConfig::new(-0.1, MatchAlgorithm::ExactPositional).is_err());
    }

    #[test]
    fn test_long_query_ceiling() {
        let edit = EditDistanceConfig::default();
        assert_eq!(edit.max_distance_for(5), 2);
        assert_eq!(edit.max_distance_for(13), 3);
        assert_eq!(edit.max_distance_for(20), 3);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = MatchConfig::autocomplete();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: MatchConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
