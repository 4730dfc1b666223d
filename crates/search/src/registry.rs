//! Document registry: identifier → document
//!
//! Source of truth for search results. Each identifier gets a document
//! number on its first insert; numbers increase monotonically and are never
//! reused, so insertion order equals sort order in every posting list.
//! Re-inserting an identifier overwrites the stored document and keeps
//! its number.

use crate::postings::DocNo;
use fts_core::{DocId, Document};
use rustc_hash::FxHashMap;

/// Identifier → document mapping with monotonic document numbers
///
/// Only live documents are stored; removing one frees its entry.
#[derive(Debug, Default)]
pub struct Registry {
    /// DocId -> DocNo
    ids: FxHashMap<DocId, DocNo>,
    /// DocNo -> live document
    docs: FxHashMap<DocNo, Document>,
    /// Number handed to the next new identifier
    next_doc_no: DocNo,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a document.
    ///
    /// Returns its document number and the document it replaced, if any.
    pub fn insert(&mut self, doc: Document) -> (DocNo, Option<Document>) {
        if let Some(&doc_no) = self.ids.get(&doc.id) {
            let previous = self.docs.insert(doc_no, doc);
            return (doc_no, previous);
        }
        let doc_no = self.next_doc_no;
        self.next_doc_no += 1;
        self.ids.insert(doc.id.clone(), doc_no);
        self.docs.insert(doc_no, doc);
        (doc_no, None)
    }

    /// Document by number
    pub fn get(&self, doc_no: DocNo) -> Option<&Document> {
        self.docs.get(&doc_no)
    }

    /// Document by identifier
    pub fn get_by_id(&self, id: &DocId) -> Option<&Document> {
        self.doc_no(id).and_then(|doc_no| self.get(doc_no))
    }

    /// Number assigned to an identifier
    pub fn doc_no(&self, id: &DocId) -> Option<DocNo> {
        self.ids.get(id).copied()
    }

    /// Remove a document. Its number is retired.
    pub fn remove(&mut self, id: &DocId) -> Option<(DocNo, Document)> {
        let doc_no = self.ids.remove(id)?;
        let doc = self.docs.remove(&doc_no)?;
        Some((doc_no, doc))
    }

    /// Number of live documents
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if no document is registered
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
