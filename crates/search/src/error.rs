//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The `Approximate` strategy was requested but no fuzzy capability is
    /// configured. This is a caller contract violation; `BestAvailable`
    /// degrades to exact matching instead of failing.
    #[error("approximate matching requested but no fuzzy capability is configured")]
    FuzzyUnavailable,

    /// Minimum score outside the valid `0.0..=1.0` range.
    #[error("minimum score must be within 0.0..=1.0, got {0}")]
    InvalidMinimumScore(f64),
}
