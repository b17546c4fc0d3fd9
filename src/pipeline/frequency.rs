//! Word-frequency table for one pipeline run.

use std::collections::HashMap;

use super::stopwords::Stopwords;
use super::tokenize;
use super::PipelineError;

/// Occurrence counts for the non-stopword tokens of one text.
///
/// Rebuilt from scratch for every run, never cached across calls. First-seen
/// order is tracked so [`FrequencyTable::most_common`] can break count ties by
/// first appearance.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Count the lowercased word tokens of `text`, excluding stopwords.
    ///
    /// Fails only when the stopword set is unavailable.
    pub fn build(text: &str) -> Result<Self, PipelineError> {
        let stopwords = Stopwords::ensure_loaded()?;
        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        for word in tokenize::words(text) {
            if stopwords.contains(&word) {
                continue;
            }
            match counts.get_mut(&word) {
                Some(n) => *n += 1,
                None => {
                    counts.insert(word.clone(), 1);
                    order.push(word);
                }
            }
        }
        Ok(Self { counts, order })
    }

    /// Count for `word`; unknown words (including stopwords) count 0.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `k` highest-count words, descending; equal counts keep first-seen
    /// order.
    pub fn most_common(&self, k: usize) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .order
            .iter()
            .map(|word| (word.as_str(), self.counts[word]))
            .collect();
        // Stable sort over the insertion-ordered list keeps ties first-seen.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(k);
        entries
    }

    /// Sum of counts over the words of `sentence`. A sentence made entirely of
    /// stopwords scores 0.
    pub fn score_sentence(&self, sentence: &str) -> u32 {
        tokenize::words(sentence)
            .iter()
            .map(|word| self.count(word))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_excludes_stopwords() {
        let table = FrequencyTable::build("the compiler and the linker").unwrap();
        assert_eq!(table.count("compiler"), 1);
        assert_eq!(table.count("linker"), 1);
        assert_eq!(table.count("the"), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_build_is_case_insensitive() {
        let table = FrequencyTable::build("Rust rust RUST").unwrap();
        assert_eq!(table.count("rust"), 3);
    }

    #[test]
    fn test_most_common_orders_by_count() {
        let table = FrequencyTable::build("beta beta gamma beta gamma delta").unwrap();
        assert_eq!(
            table.most_common(3),
            vec![("beta", 3), ("gamma", 2), ("delta", 1)]
        );
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let table = FrequencyTable::build("beta alfa beta alfa gamma").unwrap();
        assert_eq!(table.most_common(2), vec![("beta", 2), ("alfa", 2)]);
    }

    #[test]
    fn test_most_common_truncates_to_k() {
        let table = FrequencyTable::build("alpha beta gamma delta").unwrap();
        assert_eq!(table.most_common(2).len(), 2);
    }

    #[test]
    fn test_score_sentence_sums_counts() {
        let table = FrequencyTable::build("parser parser lexer").unwrap();
        assert_eq!(table.score_sentence("the parser and lexer"), 3);
    }

    #[test]
    fn test_score_sentence_all_stopwords_is_zero() {
        let table = FrequencyTable::build("parser parser lexer").unwrap();
        assert_eq!(table.score_sentence("and then it was the"), 0);
    }

    #[test]
    fn test_empty_text_gives_empty_table() {
        let table = FrequencyTable::build("").unwrap();
        assert!(table.is_empty());
        assert!(table.most_common(5).is_empty());
    }
}
