//! Text-transformation pipeline
//!
//! The pipeline turns raw pasted text into cleaned text plus optional derived
//! views (summary, keywords). All functions here are pure and reentrant; the
//! only process-wide state is the write-once stopword set in [`stopwords`].
//!
//! ## Module Structure
//!
//! - **formatter.rs**: citation/markup stripping and bullet re-indentation
//! - **tokenize.rs**: word and sentence splitting
//! - **stopwords.rs**: lazily-initialized English stopword set
//! - **frequency.rs**: per-run word frequency table
//! - **summarize.rs**: frequency-scored top-N sentence selection
//! - **keywords.rs**: top-K most frequent tokens

pub mod formatter;
pub mod frequency;
pub mod keywords;
pub mod stopwords;
pub mod summarize;
pub mod tokenize;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PipelineError {
    #[error("Stopword data is not available")]
    ResourceUnavailable,
}

/// Per-run processing options owned by the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub summary: bool,
    pub keywords: bool,
    pub summary_sentences: usize,
    pub keyword_count: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            summary: false,
            keywords: false,
            summary_sentences: summarize::DEFAULT_SENTENCES,
            keyword_count: keywords::DEFAULT_KEYWORDS,
        }
    }
}

/// Result of one pipeline run. Summary and keywords are present only when the
/// matching option is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub cleaned: String,
    pub summary: Option<String>,
    pub keywords: Option<String>,
}

/// Run the whole pipeline on `text`.
///
/// Summary and keywords are derived from the *cleaned* text, not the raw
/// input. This function never fails: summarizer and keyword extractor degrade
/// to fixed fallback strings on internal errors.
pub fn run(text: &str, options: &PipelineOptions) -> PipelineOutput {
    let cleaned = formatter::format(text);
    let summary = options
        .summary
        .then(|| summarize::summarize(&cleaned, options.summary_sentences));
    let keywords = options
        .keywords
        .then(|| keywords::extract_keywords(&cleaned, options.keyword_count));
    PipelineOutput {
        cleaned,
        summary,
        keywords,
    }
}
