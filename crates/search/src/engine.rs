//! Query orchestration: strategy selection and score reduction.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{MatchAlgorithm, MatchConfig};
use crate::error::{Result, SearchError};
use crate::exact::contains_score;
use crate::fuzzy::{EditDistanceMatcher, FuzzyMatcher, ScoreBuffer};
use crate::query::DelimitedQuery;
use crate::SearchableValue;

/// Matching strategy for one scoring call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Positional substring heuristic only.
    Exact,
    /// Fuzzy capability only. Erring when none is configured is deliberate:
    /// requesting this without a capability is a caller bug.
    Approximate,
    /// Fuzzy capability when present, exact heuristic otherwise. The only
    /// strategy that auto-degrades.
    #[default]
    BestAvailable,
}

/// Scores one query against one record's fields.
///
/// Iterates every token against every field, scores each pair with the
/// selected matcher, boosts primary-field matches, and keeps the best
/// surviving score. All inputs are immutable; the fuzzy capability is
/// resolved once at construction.
///
/// # Example
/// ```
/// use querykit_search::{DelimitedQuery, QuerySearch, SearchableValue};
///
/// let value = SearchableValue::from_fields(["bird", "fish", "frog", "bear"]);
/// let search = QuerySearch::new(value, DelimitedQuery::new("bird"));
///
/// assert_eq!(search.similarity().unwrap(), Some(1.0));
/// ```
#[derive(Clone)]
pub struct QuerySearch {
    value: SearchableValue,
    query: DelimitedQuery,
    config: MatchConfig,
    strategy: SearchStrategy,
    matcher: Option<Arc<dyn FuzzyMatcher>>,
}

impl fmt::Debug for QuerySearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuerySearch")
            .field("value", &self.value)
            .field("query", &self.query)
            .field("config", &self.config)
            .field("strategy", &self.strategy)
            .field("has_matcher", &self.matcher.is_some())
            .finish()
    }
}

impl QuerySearch {
    /// Creates a search with the default config.
    pub fn new(value: SearchableValue, query: DelimitedQuery) -> Self {
        Self::with_config(value, query, MatchConfig::default())
    }

    /// Creates a search with an explicit config.
    ///
    /// An `EditDistance` algorithm selection installs the built-in
    /// [`EditDistanceMatcher`] as the fuzzy capability; `ExactPositional`
    /// leaves the capability empty so `BestAvailable` degrades to the
    /// substring heuristic.
    pub fn with_config(value: SearchableValue, query: DelimitedQuery, config: MatchConfig) -> Self {
        let matcher: Option<Arc<dyn FuzzyMatcher>> = match config.algorithm {
            MatchAlgorithm::EditDistance(edit) => Some(Arc::new(EditDistanceMatcher::new(edit))),
            MatchAlgorithm::ExactPositional => None,
        };

        Self {
            value,
            query,
            config,
            strategy: SearchStrategy::default(),
            matcher,
        }
    }

    /// Selects a matching strategy (default: [`SearchStrategy::BestAvailable`]).
    pub fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Injects an external fuzzy capability.
    pub fn matcher(mut self, matcher: Arc<dyn FuzzyMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Declares the fuzzy capability unavailable, whatever the config says.
    pub fn without_fuzzy(mut self) -> Self {
        self.matcher = None;
        self
    }

    /// The minimum score pairs must reach to survive.
    pub fn minimum_score(&self) -> f64 {
        self.config.minimum_score
    }

    /// Computes the relevance score.
    ///
    /// Returns `Ok(None)` when no (token, field) pair meets the minimum
    /// score; any returned score is within `0.0..=1.0`.
    ///
    /// # Errors
    /// [`SearchError::FuzzyUnavailable`] when the `Approximate` strategy is
    /// selected but no capability is configured, and
    /// [`SearchError::InvalidMinimumScore`] for an out-of-range floor.
    pub fn similarity(&self) -> Result<Option<f64>> {
        self.config.validate()?;

        match self.strategy {
            SearchStrategy::Exact => Ok(self.exact_similarity()),
            SearchStrategy::Approximate => match &self.matcher {
                Some(matcher) => Ok(self.fuzzy_similarity(matcher.as_ref())),
                None => Err(SearchError::FuzzyUnavailable),
            },
            SearchStrategy::BestAvailable => match &self.matcher {
                Some(matcher) => Ok(self.fuzzy_similarity(matcher.as_ref())),
                None => {
                    debug!("no fuzzy capability, degrading to exact matching");
                    Ok(self.exact_similarity())
                }
            },
        }
    }

    fn exact_similarity(&self) -> Option<f64> {
        let mut top: f64 = 0.0;

        for token in self.query.tokens() {
            for field in self.value.fields() {
                let score = contains_score(field, token);
                if score == 0.0 {
                    continue;
                }

                debug!(%token, %field, score, "exact pair");

                if score == 1.0 {
                    return Some(1.0);
                }

                let score = self.boosted(field, score);
                if score < self.config.minimum_score {
                    continue;
                }
                if score > top {
                    top = score;
                }
            }
        }

        (top > 0.0).then(|| top.clamp(0.0, 1.0))
    }

    fn fuzzy_similarity(&self, matcher: &dyn FuzzyMatcher) -> Option<f64> {
        let mut buffer = ScoreBuffer::new();
        let mut top: f64 = 0.0;

        for token in self.query.tokens() {
            let prepared = matcher.prepare(token);

            for field in self.value.fields() {
                let Some(pair) = matcher.score(field, &prepared, &mut buffer) else {
                    continue;
                };

                let score = pair.score;
                if score == 0.0 {
                    continue;
                }

                debug!(
                    %token,
                    %field,
                    score,
                    edit_distance = pair.edit_distance,
                    "fuzzy pair"
                );

                if score >= 1.0 {
                    return Some(1.0);
                }

                let score = self.boosted(field, score);
                if score < self.config.minimum_score {
                    continue;
                }
                if score > top {
                    top = score;
                }
            }
        }

        (top > 0.0).then(|| top.clamp(0.0, 1.0))
    }

    /// Applies the primary-field boost when `field` is the record's primary
    /// field. The final reduction clamps, so a boosted score never escapes
    /// `0.0..=1.0`.
    fn boosted(&self, field: &str, score: f64) -> f64 {
        if self.value.is_primary(field) {
            score * self.config.primary_field_boost
        } else {
            score
        }
    }
}
