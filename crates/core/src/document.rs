//! Document types
//!
//! A `Document` is the unit the index accepts and returns: a caller-assigned
//! identifier plus raw, un-normalized text. Documents are immutable once
//! added; the index never rewrites stored text.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// DocId
// ============================================================================

/// Opaque, caller-assigned document identifier
///
/// Must contain at least one non-whitespace character. Empty identifiers are
/// rejected here, at the boundary, so the index never has to signal partial
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocId(String);

impl DocId {
    /// Create a new identifier
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `id` is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::invalid_input("document id must not be empty"));
        }
        Ok(DocId(id))
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for DocId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        DocId::new(value)
    }
}

impl TryFrom<&str> for DocId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        DocId::new(value)
    }
}

impl From<DocId> for String {
    fn from(id: DocId) -> Self {
        id.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Document
// ============================================================================

/// A searchable document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Caller-assigned identifier
    pub id: DocId,
    /// Raw text as supplied by the caller
    pub text: String,
}

impl Document {
    /// Create a document, validating the identifier
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `id` is empty or whitespace-only.
    ///
    /// # Example
    ///
    /// ```
    /// use fts_core::Document;
    ///
    /// let doc = Document::new("a", "red fox").unwrap();
    /// assert_eq!(doc.id.as_str(), "a");
    /// assert!(Document::new("", "red fox").is_err());
    /// ```
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        Ok(Document {
            id: DocId::new(id)?,
            text: text.into(),
        })
    }

    /// Create a document from an already validated identifier
    pub fn with_id(id: DocId, text: impl Into<String>) -> Self {
        Document {
            id,
            text: text.into(),
        }
    }
}
