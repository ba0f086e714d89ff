//! Case- and diacritic-insensitive string folding.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a string to a canonical comparable form.
///
/// Decomposes to NFD, strips combining marks, and lowercases, so that
/// `"Café"` and `"cafe"` compare equal. Every string is folded before any
/// comparison in this crate — tokens, fields, and edit-distance operands
/// alike.
///
/// # Example
/// ```
/// use querykit_search::fold;
///
/// assert_eq!(fold("Café"), "cafe");
/// assert_eq!(fold("SÉRIES"), "series");
/// ```
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
