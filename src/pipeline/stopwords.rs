//! Process-wide English stopword set.
//!
//! Loaded once, on first use, from the `stop-words` crate list. After
//! initialization the set is immutable and membership tests are O(1). A race
//! during initialization at worst duplicates the load; the cell is write-once.

use std::collections::HashSet;
use std::sync::OnceLock;

use super::PipelineError;

static ENGLISH: OnceLock<HashSet<String>> = OnceLock::new();

pub struct Stopwords;

impl Stopwords {
    /// Get the stopword set, loading it on first call.
    ///
    /// Fails with [`PipelineError::ResourceUnavailable`] if the loaded list is
    /// empty; scoring consumers catch this and degrade to their fallback
    /// strings instead of propagating.
    pub fn ensure_loaded() -> Result<&'static HashSet<String>, PipelineError> {
        let set = ENGLISH.get_or_init(|| {
            stop_words::get(stop_words::LANGUAGE::English)
                .into_iter()
                .collect()
        });
        if set.is_empty() {
            return Err(PipelineError::ResourceUnavailable);
        }
        Ok(set)
    }

    /// Membership test against the loaded set. Words are expected lowercase.
    pub fn is_stopword(word: &str) -> bool {
        Self::ensure_loaded()
            .map(|set| set.contains(word))
            .unwrap_or(false)
    }
}
