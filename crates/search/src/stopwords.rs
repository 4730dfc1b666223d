//! Fixed stop-word sets
//!
//! Plain membership sets, one per [`Language`]. No frequency-based or
//! corpus-adaptive stop-wording.

use fts_core::Language;

/// Russian prepositions.
pub const RUSSIAN: &[&str] = &[
    "в", "без", "до", "из", "к", "на", "по", "о", "от", "перед", "при", "через", "для", "с", "у",
    "за", "над", "об", "под", "про",
];

/// Standard English stopwords (Lucene's default set).
pub const ENGLISH: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Stop words for a language. Entries are already lowercase.
pub fn for_language(language: Language) -> &'static [&'static str] {
    match language {
        Language::Russian => RUSSIAN,
        Language::English => ENGLISH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_has_twenty_prepositions() {
        assert_eq!(RUSSIAN.len(), 20);
        assert!(RUSSIAN.contains(&"через"));
    }

    #[test]
    fn test_sets_are_lowercase() {
        for word in RUSSIAN.iter().chain(ENGLISH) {
            assert_eq!(word.to_lowercase(), *word);
        }
    }

    #[test]
    fn test_for_language() {
        assert_eq!(for_language(Language::Russian), RUSSIAN);
        assert_eq!(for_language(Language::English), ENGLISH);
    }
}
