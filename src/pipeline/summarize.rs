//! Frequency-scored extractive summarization.

use super::frequency::FrequencyTable;
use super::tokenize;

pub const DEFAULT_SENTENCES: usize = 3;

/// Returned instead of an error when scoring is impossible.
pub const SUMMARY_FALLBACK: &str = "Could not generate summary.";

/// Pick the `count` highest-scoring sentences of `text`.
///
/// A sentence scores the sum of its tokens' frequency counts. Selection is a
/// stable descending sort: equal scores keep original sentence order, and the
/// output joins the winners in score order, not text order. The out-of-order
/// output is intentional.
///
/// Texts with fewer sentences than `count` come back unchanged. Internal
/// failures yield [`SUMMARY_FALLBACK`]; this function never errors.
pub fn summarize(text: &str, count: usize) -> String {
    let sentences = tokenize::sentences(text);
    if sentences.len() < count {
        return text.to_string();
    }

    let table = match FrequencyTable::build(text) {
        Ok(table) => table,
        Err(_) => return SUMMARY_FALLBACK.to_string(),
    };

    let mut scored: Vec<(&str, u32)> = sentences
        .iter()
        .map(|sentence| (*sentence, table.score_sentence(sentence)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(count);

    scored
        .iter()
        .map(|(sentence, _)| *sentence)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_returned_unchanged() {
        let text = "Only one sentence here.";
        assert_eq!(summarize(text, 3), text);
    }

    #[test]
    fn test_exact_sentence_count_is_summarized() {
        // Three sentences, three requested: not "fewer than", so selection
        // runs and re-orders by score.
        let text = "Cats. Parser parser parser. Parser cats.";
        let summary = summarize(text, 3);
        assert!(summary.starts_with("Parser parser parser."));
    }

    #[test]
    fn test_selects_highest_scoring_sentences() {
        let text = "Compiler compiler compiler. Linker linker. Cats. Dogs.";
        // counts: compiler=3, linker=2, cats=1, dogs=1
        // scores:  9, 4, 1, 1
        let summary = summarize(text, 2);
        assert_eq!(summary, "Compiler compiler compiler. Linker linker.");
    }

    #[test]
    fn test_output_is_in_score_order_not_text_order() {
        let text = "Cats. Linker linker. Compiler compiler compiler. Dogs.";
        let summary = summarize(text, 2);
        assert_eq!(summary, "Compiler compiler compiler. Linker linker.");
    }

    #[test]
    fn test_score_ties_keep_original_sentence_order() {
        let text = "Compiler compiler. Cats. Dogs. Birds.";
        // cats/dogs/birds all score 1; the earlier two win.
        let summary = summarize(text, 3);
        assert_eq!(summary, "Compiler compiler. Cats. Dogs.");
    }

    #[test]
    fn test_stopword_only_sentences_score_zero() {
        let text = "And so it was. Parser parser. Tokenizer.";
        let summary = summarize(text, 2);
        assert_eq!(summary, "Parser parser. Tokenizer.");
    }
}
