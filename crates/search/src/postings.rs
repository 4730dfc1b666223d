//! Postings store: term → sorted list of document numbers
//!
//! Every list is strictly increasing. Document numbers come from the
//! [`Registry`](crate::registry::Registry) and usually arrive in increasing
//! order, so `add` is a push in the common case. A re-added document brings
//! back its original (older) number; `add` then inserts it in sorted position.
//! The merge-join in [`intersect`] relies on this ordering.

use rustc_hash::FxHashMap;

/// Internal document number assigned by the registry.
pub type DocNo = u64;

// ============================================================================
// PostingList
// ============================================================================

/// Strictly increasing list of documents containing a term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    docs: Vec<DocNo>,
}

impl PostingList {
    /// Create a new empty posting list
    pub fn new() -> Self {
        PostingList { docs: vec![] }
    }

    /// Add a document, keeping the list sorted and duplicate-free.
    ///
    /// Returns `false` if the document was already present.
    pub fn add(&mut self, doc: DocNo) -> bool {
        match self.docs.last() {
            Some(&last) if last == doc => false,
            Some(&last) if last > doc => match self.docs.binary_search(&doc) {
                Ok(_) => false,
                Err(pos) => {
                    self.docs.insert(pos, doc);
                    true
                }
            },
            _ => {
                self.docs.push(doc);
                true
            }
        }
    }

    /// Remove a document. Returns `true` if it was present.
    pub fn remove(&mut self, doc: DocNo) -> bool {
        match self.docs.binary_search(&doc) {
            Ok(pos) => {
                self.docs.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Check if the list contains a document
    pub fn contains(&self, doc: DocNo) -> bool {
        self.docs.binary_search(&doc).is_ok()
    }

    /// Highest document number in the list
    pub fn last(&self) -> Option<DocNo> {
        self.docs.last().copied()
    }

    /// Number of documents containing this term
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate in ascending order
    pub fn iter(&self) -> impl Iterator<Item = DocNo> + '_ {
        self.docs.iter().copied()
    }

    /// Borrow the sorted document numbers
    pub fn as_slice(&self) -> &[DocNo] {
        &self.docs
    }

    /// Documents present in both lists
    pub fn intersect(&self, other: &PostingList) -> PostingList {
        PostingList {
            docs: intersect(&self.docs, &other.docs),
        }
    }
}

impl<'a> IntoIterator for &'a PostingList {
    type Item = DocNo;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, DocNo>>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter().copied()
    }
}

/// Merge-join two sorted slices.
///
/// Advances whichever cursor points at the smaller value and emits values
/// found in both. Runs in O(|a| + |b|); output order is the order of `a`.
///
/// # Example
///
/// ```
/// use fts_search::postings::intersect;
///
/// assert_eq!(intersect(&[1, 3, 5, 7], &[2, 3, 7, 9]), vec![3, 7]);
/// ```
pub fn intersect(a: &[DocNo], b: &[DocNo]) -> Vec<DocNo> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut j, mut k) = (0, 0);
    while j < a.len() && k < b.len() {
        match a[j].cmp(&b[k]) {
            std::cmp::Ordering::Equal => {
                out.push(a[j]);
                j += 1;
                k += 1;
            }
            std::cmp::Ordering::Less => j += 1,
            std::cmp::Ordering::Greater => k += 1,
        }
    }
    out
}

// ============================================================================
// Postings
// ============================================================================

/// Term → posting list mapping
///
/// A term is present only while its list is non-empty, so `get` returning
/// `None` always means "no such term".
#[derive(Debug, Default)]
pub struct Postings {
    lists: FxHashMap<String, PostingList>,
}

impl Postings {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `doc` contains `term`.
    ///
    /// Returns `false` if the pair was already recorded.
    pub fn append(&mut self, term: String, doc: DocNo) -> bool {
        self.lists.entry(term).or_default().add(doc)
    }

    /// Posting list for a term
    pub fn get(&self, term: &str) -> Option<&PostingList> {
        self.lists.get(term)
    }

    /// Remove `doc` from every list, dropping lists that become empty.
    ///
    /// Returns the number of lists that held the document.
    pub fn remove_doc(&mut self, doc: DocNo) -> usize {
        let mut removed = 0;
        self.lists.retain(|_, list| {
            if list.remove(doc) {
                removed += 1;
            }
            !list.is_empty()
        });
        removed
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Check if no term has been indexed
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Total (term, document) pairs across all lists
    pub fn total_postings(&self) -> usize {
        self.lists.values().map(PostingList::len).sum()
    }
}
