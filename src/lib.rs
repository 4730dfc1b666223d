//! fts - minimal in-process full-text search
//!
//! Documents (identifier + free text) go in through [`Index::add`]; queries
//! come back through [`Index::search`] with every document containing ALL
//! query terms.
//!
//! # Quick Start
//!
//! ```
//! use fts::{Document, Index, Language};
//!
//! let index = Index::with_language(Language::English);
//! index.add(Document::new("a", "red fox")?);
//! index.add(Document::new("b", "red dog")?);
//!
//! let hits = index.search("red fox");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id.as_str(), "a");
//! # Ok::<(), fts::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `fts-core`: documents, errors, configuration
//! - `fts-search`: analyzer, postings, registry and the `Index` facade
//!
//! The `fts` binary (crate `fts-cli`) warms an index up with a synthetic
//! corpus and answers queries from the command line or stdin.

pub use fts_core::{DocId, Document, Error, FtsConfig, Language, Result, WarmupConfig};
pub use fts_search::{stemmer, Analyzer, AnalyzerBuilder, Index, IndexStats, Stemmer};
