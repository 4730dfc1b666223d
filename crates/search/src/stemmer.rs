//! Pluggable stemming capability
//!
//! The analyzer depends only on a `stem(token) -> stem` function, so any
//! closure can be injected. Snowball stemmers from `rust-stemmers` cover the
//! configured languages.

use fts_core::Language;
use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};
use std::sync::Arc;

/// Stemming function shared by every clone of an analyzer.
pub type Stemmer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Snowball stemmer for `language`.
///
/// # Example
///
/// ```
/// use fts_core::Language;
/// use fts_search::stemmer;
///
/// let stem = stemmer::snowball(Language::English);
/// assert_eq!(stem("running"), "run");
/// ```
pub fn snowball(language: Language) -> Stemmer {
    let algorithm = match language {
        Language::Russian => Algorithm::Russian,
        Language::English => Algorithm::English,
    };
    let stemmer = SnowballStemmer::create(algorithm);
    Arc::new(move |token: &str| stemmer.stem(token).into_owned())
}

/// Stemmer that returns every token unchanged.
pub fn identity() -> Stemmer {
    Arc::new(|token: &str| token.to_string())
}
