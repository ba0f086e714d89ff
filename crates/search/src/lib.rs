//! Query relevance scoring for interactive search and autocomplete.
//!
//! This crate provides:
//! - Delimiter-aware query tokenization with case/diacritic folding
//! - Levenshtein edit distance and similarity
//! - A positional/length substring heuristic needing no fuzzy capability
//! - A pluggable fuzzy-matching contract with a built-in edit-distance engine
//! - Strategy-driven orchestration with primary-field boosting
//!
//! Every call scores one query against one record's field list and returns
//! a single score in `0.0..=1.0`, or no score when nothing clears the
//! configured minimum. There is no index and no persisted state; calls are
//! pure and safe to run in parallel.
//!
//! # Example
//!
//! ```
//! use querykit_search::{DelimitedQuery, QuerySearch, SearchableValue};
//!
//! let record = SearchableValue::from_fields(["bird_colony", "cricket_chirp"]);
//! let search = QuerySearch::new(record, DelimitedQuery::new("bird"));
//!
//! assert_eq!(search.similarity().unwrap(), Some(1.0));
//! ```

mod alignment;
pub mod batch;
mod config;
mod engine;
mod error;
mod exact;
mod fuzzy;
mod levenshtein;
mod normalize;
mod query;

#[cfg(feature = "wasm")]
mod wasm;

pub use alignment::local_alignment_score;
pub use config::{
    EditDistanceConfig, GapPenalty, MatchAlgorithm, MatchConfig, DEFAULT_PRIMARY_FIELD_BOOST,
};
pub use engine::{QuerySearch, SearchStrategy};
pub use error::{Result, SearchError};
pub use exact::contains_score;
pub use fuzzy::{EditDistanceMatcher, FuzzyMatcher, FuzzyScore, PreparedQuery, ScoreBuffer};
pub use levenshtein::{levenshtein_distance, levenshtein_similarity};
pub use normalize::fold;
pub use query::DelimitedQuery;

use serde::{Deserialize, Serialize};

/// A record's searchable text fields plus an optional primary field.
///
/// The primary field, when set, should equal one of `fields`; matches on it
/// receive the configured score boost. The engine only reads this value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchableValue {
    fields: Vec<String>,
    primary_field: Option<String>,
}

impl SearchableValue {
    /// Creates a value with no primary field.
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            primary_field: None,
        }
    }

    /// Creates a value with a designated primary field.
    pub fn with_primary(fields: Vec<String>, primary_field: String) -> Self {
        Self {
            fields,
            primary_field: Some(primary_field),
        }
    }

    /// Convenience constructor from anything string-like.
    ///
    /// # Example
    /// ```
    /// use querykit_search::SearchableValue;
    ///
    /// let value = SearchableValue::from_fields(["bird", "fish"]);
    /// assert_eq!(value.fields().len(), 2);
    /// ```
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(fields.into_iter().map(Into::into).collect())
    }

    /// The ordered field list.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The designated primary field, if any.
    pub fn primary_field(&self) -> Option<&str> {
        self.primary_field.as_deref()
    }

    pub(crate) fn is_primary(&self, field: &str) -> bool {
        self.primary_field.as_deref() == Some(field)
    }
}

impl From<Vec<String>> for SearchableValue {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

/// The capability host application records expose to the engine: an ordered
/// field list and an optional primary-field marker.
pub trait Searchable {
    /// The record's searchable fields.
    fn searchable_value(&self) -> SearchableValue;

    /// Scores a query against this record with the default config and the
    /// `BestAvailable` strategy.
    fn similarity_to(&self, query: &DelimitedQuery) -> Option<f64> {
        self.similarity_with(query, MatchConfig::default())
    }

    /// Scores a query against this record with an explicit config.
    fn similarity_with(&self, query: &DelimitedQuery, config: MatchConfig) -> Option<f64> {
        QuerySearch::with_config(self.searchable_value(), query.clone(), config)
            .similarity()
            .ok()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Creature;

    impl Searchable for Creature {
        fn searchable_value(&self) -> SearchableValue {
            SearchableValue::from_fields(["bird", "fish", "frog", "bear"])
        }
    }

    #[test]
    fn test_searchable_trait_default_path() {
        let creature = Creature;
        assert_eq!(
            creature.similarity_to(&DelimitedQuery::new("bird")),
            Some(1.0)
        );
        assert_eq!(creature.similarity_to(&DelimitedQuery::new("xyzzy")), None);
    }

    #[test]
    fn test_searchable_trait_with_config() {
        let creature = Creature;
        let config = MatchConfig {
            minimum_score: 0.6,
            ..MatchConfig::default()
        };
        let score = creature
            .similarity_with(&DelimitedQuery::new("froggy"), config)
            .expect("should match frog");
        assert!(score < 1.0);
    }

    #[test]
    fn test_searchable_value_accessors() {
        let value = SearchableValue::with_primary(
            vec!["title".into(), "tag".into()],
            "title".into(),
        );
        assert_eq!(value.fields(), ["title", "tag"]);
        assert_eq!(value.primary_field(), Some("title"));
        assert!(value.is_primary("title"));
        assert!(!value.is_primary("tag"));
    }
}
