//! Top-K keyword extraction.

use super::frequency::FrequencyTable;

pub const DEFAULT_KEYWORDS: usize = 5;

/// Returned instead of an error when scoring is impossible.
pub const KEYWORDS_FALLBACK: &str = "Could not extract keywords.";

/// The `count` most frequent non-stopword tokens of `text`, joined `", "`.
///
/// Ties keep first-seen order; counts are not part of the output. Internal
/// failures yield [`KEYWORDS_FALLBACK`]; this function never errors.
pub fn extract_keywords(text: &str, count: usize) -> String {
    let table = match FrequencyTable::build(text) {
        Ok(table) => table,
        Err(_) => return KEYWORDS_FALLBACK.to_string(),
    };

    table
        .most_common(count)
        .iter()
        .map(|(word, _)| *word)
        .collect::<Vec<_>>()
        .join(", ")
}
