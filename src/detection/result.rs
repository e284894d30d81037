use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::types::{Algorithm, DocumentId};

/// Outcome of a finished detection session.
///
/// Built once from the final flag vector and matched-document set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    algorithm: Algorithm,
    /// Percentage of flagged sentences, 0-100
    ratio: f64,
    total_sentences: usize,
    matched_sentences: usize,
    flags: Vec<bool>,
    /// Iterated in lexicographic order
    matched_documents: BTreeSet<DocumentId>,
}

impl DetectionResult {
    pub(crate) fn new(
        algorithm: Algorithm,
        flags: Vec<bool>,
        matched_documents: BTreeSet<DocumentId>,
    ) -> Self {
        let total_sentences = flags.len();
        let matched_sentences = flags.iter().filter(|&&f| f).count();

        #[allow(clippy::cast_precision_loss)] // sentence counts are far below 2^52
        let ratio = if total_sentences == 0 {
            0.0
        } else {
            matched_sentences as f64 / total_sentences as f64 * 100.0
        };

        Self {
            algorithm,
            ratio,
            total_sentences,
            matched_sentences,
            flags,
            matched_documents,
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Flagged sentences as a percentage of all sentences (0 when there are none)
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub fn total_sentences(&self) -> usize {
        self.total_sentences
    }

    #[must_use]
    pub fn matched_sentences(&self) -> usize {
        self.matched_sentences
    }

    /// One flag per input sentence, in input order
    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Documents that contained at least one sentence
    #[must_use]
    pub fn matched_documents(&self) -> &BTreeSet<DocumentId> {
        &self.matched_documents
    }

    #[must_use]
    pub fn is_plagiarized(&self) -> bool {
        self.matched_sentences > 0
    }
}
