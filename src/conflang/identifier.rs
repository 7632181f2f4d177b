//! Identifier validation for mapping keys

use once_cell::sync::Lazy;
use regex::Regex;

/// Full-match identifier grammar
static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[_a-zA-Z][_a-zA-Z0-9]*\z").unwrap());

/// Whether `name` is a letter or underscore followed by letters, digits or underscores
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}
