//! Text analyzer: tokenize → lowercase → stop-word filter → stem
//!
//! The same analyzer is used for indexing and for querying, so a surface
//! word always maps to the same index term. `analyze` is a pure function of
//! its input: output order follows input order and repeated terms are kept.

use crate::stemmer::{self, Stemmer};
use crate::stopwords;
use crate::tokenizer::tokenize;
use fts_core::Language;
use rustc_hash::FxHashSet;
use std::fmt;

/// Normalized, stemmed token used as an index key.
pub type Term = String;

// ============================================================================
// Analyzer
// ============================================================================

/// Text analysis pipeline
///
/// Cheap to clone: the stemmer is shared behind an `Arc`.
#[derive(Clone)]
pub struct Analyzer {
    language: Language,
    stop_words: FxHashSet<String>,
    stemmer: Stemmer,
}

impl Analyzer {
    /// Analyzer with the stop words and Snowball stemmer of `language`
    pub fn new(language: Language) -> Self {
        Self::builder().language(language).build()
    }

    /// Start building a custom analyzer
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// Configured language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Check if a lowercase token is a stop word
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Run the full pipeline over `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use fts_core::Language;
    /// use fts_search::Analyzer;
    ///
    /// let analyzer = Analyzer::new(Language::English);
    /// assert_eq!(analyzer.analyze("The Running Foxes"), vec!["run", "fox"]);
    /// ```
    pub fn analyze(&self, text: &str) -> Vec<Term> {
        tokenize(text)
            .into_iter()
            .filter(|token| !self.is_stop_word(token))
            .map(|token| (self.stemmer)(&token))
            .filter(|term| !term.is_empty())
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("language", &self.language)
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// AnalyzerBuilder
// ============================================================================

/// Builder for [`Analyzer`]
///
/// Stop words and stemmer default to those of the chosen language; either
/// can be replaced independently.
#[derive(Default)]
pub struct AnalyzerBuilder {
    language: Language,
    stop_words: Option<FxHashSet<String>>,
    stemmer: Option<Stemmer>,
}

impl AnalyzerBuilder {
    /// Set the language
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Replace the stop-word set. Words are lowercased on insert.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = Some(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    /// Inject a stemming function
    pub fn stemmer(mut self, stemmer: Stemmer) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Analyzer {
        let language = self.language;
        Analyzer {
            language,
            stop_words: self.stop_words.unwrap_or_else(|| {
                stopwords::for_language(language)
                    .iter()
                    .map(|w| w.to_string())
                    .collect()
            }),
            stemmer: self
                .stemmer
                .unwrap_or_else(|| stemmer::snowball(language)),
        }
    }
}
