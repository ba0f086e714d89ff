//! WASM bindings for query scoring.

use wasm_bindgen::prelude::*;

use crate::{DelimitedQuery, QuerySearch, SearchableValue};

/// Tokenizes a query string and returns the tokens as a JSON array.
#[wasm_bindgen]
pub fn tokenize(query: &str) -> String {
    let query = DelimitedQuery::new(query);
    serde_json::to_string(query.tokens()).unwrap_or_else(|_| "[]".to_string())
}

/// Calculates the Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Scores `query` against a substring match in `text` (0.0 to 1.0).
#[wasm_bindgen]
pub fn contains_score(text: &str, query: &str) -> f64 {
    crate::contains_score(text, query)
}

/// Scores a query against a record's fields with the default config.
///
/// # Arguments
/// * `query` - Raw query string
/// * `fields_json` - JSON array of field strings
///
/// # Returns
/// Score in `0.0..=1.0`, or `-1.0` when nothing met the minimum score or
/// the fields could not be parsed
#[wasm_bindgen]
pub fn similarity(query: &str, fields_json: &str) -> f64 {
    let fields: Vec<String> = match serde_json::from_str(fields_json) {
        Ok(fields) => fields,
        Err(_) => return -1.0,
    };

    QuerySearch::new(SearchableValue::new(fields), DelimitedQuery::new(query))
        .similarity()
        .ok()
        .flatten()
        .unwrap_or(-1.0)
}
