//! Word and sentence splitting.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
    // A sentence ends at terminal punctuation followed by whitespace.
    static ref SENTENCE_BOUNDARY_RE: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Maximal word-character runs, lowercased for scoring.
pub fn words(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Split `text` into sentences.
///
/// The boundary is `.`, `!` or `?` followed by whitespace; the punctuation
/// stays with its sentence and the whitespace is consumed. End of text closes
/// the final sentence. With stacked punctuation ("What?!") the split happens
/// after the last terminal character, since only it is followed by whitespace.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY_RE.find_iter(text) {
        // The terminal punctuation is a single ASCII byte.
        let end = boundary.start() + 1;
        out.push(&text[start..end]);
        start = boundary.end();
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}
