//! Inverted index with conjunctive query resolution
//!
//! This module provides:
//! - `Index`, the facade owning the document registry and the postings store
//! - `add` / `search`, the two operations callers need
//! - `remove` for callers that must re-index a document
//!
//! # Query semantics
//!
//! A query is analyzed with the same pipeline as documents. A document
//! matches only if it contains every query term (AND). A query that analyzes
//! to no terms matches nothing.
//!
//! # Re-adding a document
//!
//! `add` with an identifier that is already registered overwrites the stored
//! document but leaves the postings of the old text in place: the document
//! can still be found by words it no longer contains, and results show the
//! new text. Call `remove` before `add` to re-index cleanly.

use crate::analyzer::Analyzer;
use crate::postings::{PostingList, Postings};
use crate::registry::Registry;
use fts_core::{DocId, Document, Language};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// IndexStats
// ============================================================================

/// Size of the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Registered documents
    pub documents: usize,
    /// Distinct terms
    pub terms: usize,
    /// (term, document) pairs across all posting lists
    pub postings: usize,
}

// ============================================================================
// Index
// ============================================================================

#[derive(Debug, Default)]
struct IndexState {
    registry: Registry,
    postings: Postings,
}

/// In-memory full-text index
///
/// # Thread Safety
///
/// Registry and postings sit behind one `RwLock`. `search` and the other
/// readers share the lock; `add` and `remove` take it exclusively, so a
/// reader never observes a half-indexed document. Text analysis runs before
/// the lock is taken. Share across threads with `Arc<Index>`.
#[derive(Debug)]
pub struct Index {
    analyzer: Analyzer,
    state: RwLock<IndexState>,
}

impl Default for Index {
    fn default() -> Self {
        Self::new(Analyzer::default())
    }
}

impl Index {
    /// Create an empty index using `analyzer` for documents and queries
    pub fn new(analyzer: Analyzer) -> Self {
        Index {
            analyzer,
            state: RwLock::new(IndexState::default()),
        }
    }

    /// Create an empty index with the default analyzer for `language`
    pub fn with_language(language: Language) -> Self {
        Self::new(Analyzer::new(language))
    }

    /// Analyzer shared by indexing and querying
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    // ========================================================================
    // Updates
    // ========================================================================

    /// Index a document.
    ///
    /// Overwrites any document with the same identifier (see module docs for
    /// how postings behave on re-add).
    pub fn add(&self, doc: Document) {
        let terms = self.analyzer.analyze(&doc.text);
        let term_count = terms.len();

        let mut state = self.state.write();
        let (doc_no, previous) = state.registry.insert(doc);
        let mut appended = 0usize;
        for term in terms {
            if state.postings.append(term, doc_no) {
                appended += 1;
            }
        }
        drop(state);

        debug!(
            target: "fts::index",
            doc_no,
            terms = term_count,
            postings = appended,
            replaced = previous.is_some(),
            "Document added"
        );
    }

    /// Remove a document and prune it from every posting list.
    ///
    /// Returns the removed document, or `None` if the identifier is unknown.
    pub fn remove(&self, id: &DocId) -> Option<Document> {
        let mut state = self.state.write();
        let (doc_no, doc) = state.registry.remove(id)?;
        let pruned = state.postings.remove_doc(doc_no);
        drop(state);

        debug!(target: "fts::index", id = %id, doc_no, pruned, "Document removed");
        Some(doc)
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Documents containing every term of `query`.
    ///
    /// Results come in the order documents were first added. Never fails;
    /// no match yields an empty vector.
    ///
    /// # Example
    ///
    /// ```
    /// use fts_core::{Document, Language};
    /// use fts_search::Index;
    ///
    /// let index = Index::with_language(Language::English);
    /// index.add(Document::new("a", "red fox").unwrap());
    /// index.add(Document::new("b", "red dog").unwrap());
    ///
    /// let hits = index.search("red fox");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].id.as_str(), "a");
    /// ```
    pub fn search(&self, query: &str) -> Vec<Document> {
        let terms = self.analyzer.analyze(query);
        if terms.is_empty() {
            debug!(target: "fts::index", "Query has no terms");
            return Vec::new();
        }

        let state = self.state.read();
        let candidates = Self::resolve_terms(&state.postings, &terms);
        let hits: Vec<Document> = candidates
            .iter()
            .filter_map(|doc_no| state.registry.get(doc_no).cloned())
            .collect();
        drop(state);

        debug!(target: "fts::index", terms = terms.len(), hits = hits.len(), "Search");
        hits
    }

    /// Intersect the posting lists of `terms` left to right.
    ///
    /// Empty as soon as a term is unknown or the running intersection runs dry.
    fn resolve_terms(postings: &Postings, terms: &[String]) -> PostingList {
        let mut terms = terms.iter();
        let mut acc = match terms.next().and_then(|t| postings.get(t)) {
            Some(list) => list.clone(),
            None => return PostingList::new(),
        };
        for term in terms {
            let Some(list) = postings.get(term) else {
                return PostingList::new();
            };
            acc = acc.intersect(list);
            if acc.is_empty() {
                break;
            }
        }
        acc
    }

    /// Stored document by identifier
    pub fn get(&self, id: &DocId) -> Option<Document> {
        self.state.read().registry.get_by_id(id).cloned()
    }

    /// Check if a document is registered
    pub fn contains(&self, id: &DocId) -> bool {
        self.state.read().registry.doc_no(id).is_some()
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of registered documents
    pub fn len(&self) -> usize {
        self.state.read().registry.len()
    }

    /// Check if the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.state.read().registry.is_empty()
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.state.read().postings.len()
    }

    /// Snapshot of the index size, taken under one read lock
    pub fn stats(&self) -> IndexStats {
        let state = self.state.read();
        IndexStats {
            documents: state.registry.len(),
            terms: state.postings.len(),
            postings: state.postings.total_postings(),
        }
    }

    /// Posting list of one already-analyzed term, as document identifiers.
    ///
    /// Used by tests and diagnostics; `None` if the term is unknown.
    pub fn postings_for(&self, term: &str) -> Option<Vec<DocId>> {
        let state = self.state.read();
        let list = state.postings.get(term)?;
        Some(
            list.iter()
                .filter_map(|doc_no| state.registry.get(doc_no).map(|d| d.id.clone()))
                .collect(),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
