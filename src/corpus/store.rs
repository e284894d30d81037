use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::document::ReferenceDocument;
use crate::core::types::DocumentId;
use crate::parsing::sentences::ParseError;
use crate::utils::validation::{check_document_limit, validate_document_id, ValidationError};

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read corpus: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse corpus manifest: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to load reference document: {0}")]
    DocumentError(#[from] ParseError),

    #[error("Duplicate document id '{0}'")]
    DuplicateDocument(DocumentId),

    #[error("Invalid document id: {0}")]
    InvalidId(#[from] ValidationError),

    #[error("{0}")]
    TooManyDocuments(String),
}

/// Manifest version for compatibility checking
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Serializable corpus format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusManifest {
    pub version: String,
    pub created_at: String,
    pub documents: Vec<ReferenceDocument>,
}

/// In-memory reference corpus.
///
/// Document texts are loaded once and shared by every sentence comparison.
#[derive(Debug, Default)]
pub struct ReferenceCorpus {
    documents: Vec<ReferenceDocument>,

    /// Index: document ID -> index in documents vec
    id_to_index: HashMap<DocumentId, usize>,
}

impl ReferenceCorpus {
    /// Create an empty corpus
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, returning the corpus for chaining
    ///
    /// # Errors
    ///
    /// Fails on an invalid or duplicate id, or when the corpus is full.
    pub fn with_document(
        mut self,
        id: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, CorpusError> {
        self.add_document(ReferenceDocument::new(id, text))?;
        Ok(self)
    }

    /// Add a document to the corpus
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::InvalidId` if the id fails validation,
    /// `CorpusError::DuplicateDocument` if the id is already present, or
    /// `CorpusError::TooManyDocuments` if the corpus is full.
    pub fn add_document(&mut self, document: ReferenceDocument) -> Result<(), CorpusError> {
        validate_document_id(document.id.as_str())?;

        if self.id_to_index.contains_key(&document.id) {
            return Err(CorpusError::DuplicateDocument(document.id));
        }
        if let Some(msg) = check_document_limit(self.documents.len()) {
            return Err(CorpusError::TooManyDocuments(msg));
        }

        self.id_to_index
            .insert(document.id.clone(), self.documents.len());
        self.documents.push(document);
        Ok(())
    }

    /// Load a corpus manifest from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid manifest.
    pub fn load_from_file(path: &Path) -> Result<Self, CorpusError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a corpus manifest from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or lists a document twice.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let manifest: CorpusManifest = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if manifest.version != MANIFEST_VERSION {
            warn!(
                expected = MANIFEST_VERSION,
                found = %manifest.version,
                "Corpus manifest version mismatch"
            );
        }

        let mut corpus = Self::new();
        corpus.extend(manifest.documents)?;
        Ok(corpus)
    }

    /// Load every `*.txt` file directly inside `dir`, keyed by file name.
    ///
    /// Files are added in file-name order; sentence terminators are stripped
    /// from each text.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or any file cannot be read.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CorpusError> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_txt = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
            if path.is_file() && is_txt {
                paths.push(path);
            }
        }
        paths.sort();

        let mut corpus = Self::new();
        for path in paths {
            corpus.add_text_file(&path)?;
        }

        debug!(dir = %dir.display(), documents = corpus.len(), "Loaded corpus directory");
        Ok(corpus)
    }

    /// Add a single reference text file, keyed by its file name
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its name is already present.
    pub fn add_text_file(&mut self, path: &Path) -> Result<(), CorpusError> {
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let raw = crate::parsing::sentences::read_text(path)?;
        self.add_document(ReferenceDocument::from_raw(id, &raw))
    }

    /// Merge another corpus into this one
    ///
    /// # Errors
    ///
    /// Fails on the first duplicate id.
    pub fn merge(&mut self, other: ReferenceCorpus) -> Result<(), CorpusError> {
        self.extend(other.documents)
    }

    fn extend(
        &mut self,
        documents: impl IntoIterator<Item = ReferenceDocument>,
    ) -> Result<(), CorpusError> {
        for document in documents {
            self.add_document(document)?;
        }
        Ok(())
    }

    /// Get a document by ID
    #[must_use]
    pub fn get(&self, id: &DocumentId) -> Option<&ReferenceDocument> {
        self.id_to_index.get(id).map(|&idx| &self.documents[idx])
    }

    /// Documents in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceDocument> {
        self.documents.iter()
    }

    /// Export corpus to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CorpusError> {
        let manifest = CorpusManifest {
            version: MANIFEST_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            documents: self.documents.clone(),
        };
        Ok(serde_json::to_string_pretty(&manifest)?)
    }

    /// Number of documents in corpus
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if corpus is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReferenceCorpus {
    type Item = &'a ReferenceDocument;
    type IntoIter = std::slice::Iter<'a, ReferenceDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let corpus = ReferenceCorpus::new()
            .with_document("file1.txt", "first text")
            .unwrap()
            .with_document("file2.txt", "second text")
            .unwrap();

        assert_eq!(corpus.len(), 2);
        let doc = corpus.get(&DocumentId::new("file2.txt")).unwrap();
        assert_eq!(doc.text, "second text");
        assert!(corpus.get(&DocumentId::new("missing.txt")).is_none());
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let corpus = ReferenceCorpus::new()
            .with_document("b", "x")
            .unwrap()
            .with_document("a", "y")
            .unwrap();
        let ids: Vec<&str> = corpus.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!((&corpus).into_iter().count(), 2);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = ReferenceCorpus::new()
            .with_document("doc", "one")
            .unwrap()
            .with_document("doc", "two");
        assert!(matches!(result, Err(CorpusError::DuplicateDocument(id)) if id.as_str() == "doc"));
    }

    #[test]
    fn test_invalid_id_rejected() {
        let result = ReferenceCorpus::new().with_document("  ", "text");
        assert!(matches!(result, Err(CorpusError::InvalidId(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let corpus = ReferenceCorpus::new()
            .with_document("doc1", "the cat sat")
            .unwrap();
        let json = corpus.to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"created_at\""));

        let loaded = ReferenceCorpus::from_json(&json).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.get(&DocumentId::new("doc1")).unwrap().text,
            "the cat sat"
        );
    }

    #[test]
    fn test_from_json_version_mismatch_still_loads() {
        let json = r#"{
            "version": "0.0.1",
            "created_at": "2024-01-01T00:00:00Z",
            "documents": [{"id": "a", "text": "alpha"}]
        }"#;
        let corpus = ReferenceCorpus::from_json(json).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            ReferenceCorpus::from_json("{not json"),
            Err(CorpusError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("file2.txt"), "Second doc. More text.").unwrap();
        std::fs::write(dir.path().join("file1.txt"), "First doc.").unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let corpus = ReferenceCorpus::load_from_dir(dir.path()).unwrap();
        let ids: Vec<&str> = corpus.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["file1.txt", "file2.txt"]);
        assert_eq!(
            corpus.get(&DocumentId::new("file2.txt")).unwrap().text,
            "Second doc More text"
        );
    }

    #[test]
    fn test_merge_detects_duplicates() {
        let mut a = ReferenceCorpus::new().with_document("x", "1").unwrap();
        let b = ReferenceCorpus::new().with_document("y", "2").unwrap();
        a.merge(b).unwrap();
        assert_eq!(a.len(), 2);

        let c = ReferenceCorpus::new().with_document("x", "3").unwrap();
        assert!(a.merge(c).is_err());
    }
}
