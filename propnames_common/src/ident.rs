//! Conversion of property-value alias names into identifier constants.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "ABCWord" -> "ABC_Word": split an acronym from a following capitalized
    // word. Must run before the camel-case pass.
    static ref ACRONYM_BOUNDARY_RE: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();
    // "wordWord" -> "word_Word"
    static ref CAMEL_BOUNDARY_RE: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
}

/// Builds the uppercase, underscore-separated identifier for an alias.
///
/// Underscores are inserted at acronym and camel-case boundaries, hyphens
/// become underscores, and the result is uppercased. The two regex passes run
/// in a fixed order; swapping them changes the split on acronym-prefixed
/// names such as `NFCQuickCheck`. There is no error path: malformed input
/// yields a malformed but harmless identifier.
pub fn build_identifier(alias: &str) -> String {
    let split = ACRONYM_BOUNDARY_RE.replace_all(alias, "${1}_${2}");
    let split = CAMEL_BOUNDARY_RE.replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_uppercase()
}
