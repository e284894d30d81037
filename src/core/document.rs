use serde::{Deserialize, Serialize};

use crate::core::types::DocumentId;
use crate::parsing::sentences::reference_text;

/// A reference document in the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDocument {
    /// Unique identifier (typically the source file name)
    pub id: DocumentId,

    /// Full document text that sentences are searched in
    pub text: String,
}

impl ReferenceDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(id),
            text: text.into(),
        }
    }

    /// Build a document from raw file content, stripping sentence terminators
    /// the same way candidate sentences are stripped of them.
    pub fn from_raw(id: impl Into<String>, raw: &str) -> Self {
        Self::new(id, reference_text(raw))
    }

    /// Length of the searchable text in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
