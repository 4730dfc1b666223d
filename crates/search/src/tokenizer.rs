//! Tokenizer: the first two stages of the analysis pipeline
//!
//! Splits text on every character that is neither a letter nor a digit and
//! lowercases each token. Both steps are Unicode-aware. Stop-word removal
//! and stemming happen later, in the [`Analyzer`](crate::Analyzer).

/// Whether `c` separates tokens.
#[inline]
fn is_separator(c: char) -> bool {
    !c.is_alphabetic() && !c.is_numeric()
}

/// Split text into raw tokens, discarding empty ones.
///
/// # Example
///
/// ```
/// use fts_search::tokenizer::split_words;
///
/// let words: Vec<_> = split_words("Red-fox, 2 dogs!").collect();
/// assert_eq!(words, vec!["Red", "fox", "2", "dogs"]);
/// ```
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|s| !s.is_empty())
}

/// Tokenize text into lowercase tokens.
///
/// # Example
///
/// ```
/// use fts_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Hello, World!");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    split_words(text).map(str::to_lowercase).collect()
}
