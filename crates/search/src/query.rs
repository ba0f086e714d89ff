//! Query tokenization.
//!
//! A raw query string is split into an ordered list of match tokens. The
//! delimiter is detected from the raw input (comma wins over space), the
//! string is folded afterwards, and space-delimited queries keep the whole
//! phrase as their first token so that multi-word fields can still match.

use serde::{Deserialize, Serialize};

use crate::normalize::fold;

/// A tokenized, normalized query.
///
/// Built once per query string and immutable afterwards. Token order is
/// insertion order; every token ending in `s` also contributes a singular
/// variant appended after the primary tokens.
///
/// # Example
/// ```
/// use querykit_search::DelimitedQuery;
///
/// let query = DelimitedQuery::new("haunted stonehenge moon");
/// assert_eq!(
///     query.tokens(),
///     ["haunted stonehenge moon", "haunted", "stonehenge", "moon"]
/// );
///
/// let query = DelimitedQuery::new("cow, fish");
/// assert_eq!(query.tokens(), ["cow", "fish"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelimitedQuery {
    tokens: Vec<String>,
    original_text: String,
}

impl DelimitedQuery {
    /// Tokenizes a raw query string.
    pub fn new(input: &str) -> Self {
        if input.is_empty() {
            return Self::default();
        }

        // Delimiter detection happens on the raw string, folding afterwards.
        let comma_delimited = input.contains(',');
        let normalized = fold(input);

        let mut tokens: Vec<String> = Vec::new();

        if comma_delimited {
            tokens.extend(
                normalized
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string),
            );
        } else {
            // Keep the whole phrase as the first token, then the words.
            tokens.push(normalized.clone());
            if input.contains(' ') {
                tokens.extend(normalized.split_whitespace().map(str::to_string));
            }
        }

        // If a token ends with an s, also try the singular(ish) form.
        // A lexical heuristic, not stemming; it helps matches in some cases.
        let singulars: Vec<String> = tokens
            .iter()
            .filter(|token| token.ends_with('s'))
            .map(|token| token[..token.len() - 1].to_string())
            .collect();

        tokens.extend(singulars);

        Self {
            tokens,
            original_text: input.to_string(),
        }
    }

    /// The ordered match tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The raw query string before normalization.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// Returns true if tokenization produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for DelimitedQuery {
    fn from(input: &str) -> Self {
        Self::new(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_delimited() {
        let query = DelimitedQuery::new("haunted stonehenge moon");
        assert_eq!(
            query.tokens(),
            ["haunted stonehenge moon", "haunted", "stonehenge", "moon"]
        );
    }

    #[test]
    fn test_comma_delimited() {
        let query = DelimitedQuery::new("cow, fish");
        assert_eq!(query.tokens(), ["cow", "fish"]);
    }

    #[test]
    fn test_malformed_delimiters() {
        let query = DelimitedQuery::new("   cow   , fish  ,,, , ,frog ,  , , ");
        assert_eq!(query.tokens(), ["cow", "fish", "frog"]);
    }

    #[test]
    fn test_empty_input() {
        let query = DelimitedQuery::new("");
        assert!(query.is_empty());
        assert_eq!(query.original_text(), "");
    }

    #[test]
    fn test_single_word() {
        let query = DelimitedQuery::new("bird");
        assert_eq!(query.tokens(), ["bird"]);
    }

    #[test]
    fn test_singular_variants_appended() {
        let query = DelimitedQuery::new("cows, fish");
        assert_eq!(query.tokens(), ["cows", "fish", "cow"]);
    }

    #[test]
    fn test_singular_variant_of_phrase_token() {
        let query = DelimitedQuery::new("haunted moons");
        assert_eq!(
            query.tokens(),
            ["haunted moons", "haunted", "moons", "haunted moon", "moon"]
        );
    }

    #[test]
    fn test_normalizes_tokens() {
        let query = DelimitedQuery::new("Café, NAÏVE");
        assert_eq!(query.tokens(), ["cafe", "naive"]);
        assert_eq!(query.original_text(), "Café, NAÏVE");
    }

    #[test]
    fn test_token_order_is_stable() {
        let a = DelimitedQuery::new("one two three");
        let b = DelimitedQuery::new("one two three");
        assert_eq!(a, b);
        assert_eq!(a.tokens()[0], "one two three");
    }
}
