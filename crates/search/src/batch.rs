//! Batch scoring across many records.
//!
//! Scores one query against many records independently. Each record keeps
//! its position in the output; nothing is sorted or ranked here. With the
//! `parallel` feature (default), records are scored on the rayon thread
//! pool; every worker owns its own scratch state, so no coordination is
//! needed.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{DelimitedQuery, MatchConfig, QuerySearch, SearchableValue};

/// Scores `query` against every record in `values`.
///
/// # Arguments
/// * `values` - Records to score, one result per record in the same order
/// * `query` - Tokenized query
/// * `config` - Match configuration applied to every record
///
/// # Returns
/// Per-record scores; `None` where no pair met the minimum score
pub fn score_values(
    values: &[SearchableValue],
    query: &DelimitedQuery,
    config: &MatchConfig,
) -> Vec<Option<f64>> {
    #[cfg(feature = "parallel")]
    {
        values
            .par_iter()
            .map(|value| score_one(value, query, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        values
            .iter()
            .map(|value| score_one(value, query, config))
            .collect()
    }
}

fn score_one(
    value: &SearchableValue,
    query: &DelimitedQuery,
    config: &MatchConfig,
) -> Option<f64> {
    QuerySearch::with_config(value.clone(), query.clone(), *config)
        .similarity()
        .ok()
        .flatten()
}
