//! In-memory full-text search
//!
//! This crate provides:
//! - Analyzer: tokenize → lowercase → stop-word filter → stem
//! - Pluggable stemmer capability (Snowball via `rust-stemmers`)
//! - Postings store with sorted posting lists and merge-join intersection
//! - Document registry assigning sequential document numbers
//! - Index: the facade exposing `add` and `search`
//!
//! # Usage
//!
//! ```
//! use fts_core::{Document, Language};
//! use fts_search::Index;
//!
//! let index = Index::with_language(Language::English);
//! index.add(Document::new("a", "red fox").unwrap());
//! index.add(Document::new("b", "red dog").unwrap());
//!
//! assert_eq!(index.search("red").len(), 2);
//! assert_eq!(index.search("red fox")[0].id.as_str(), "a");
//! assert!(index.search("cat").is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analyzer;
pub mod index;
pub mod postings;
pub mod registry;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, AnalyzerBuilder, Term};
pub use index::{Index, IndexStats};
pub use postings::{DocNo, PostingList, Postings};
pub use registry::Registry;
pub use stemmer::Stemmer;
pub use tokenizer::tokenize;
