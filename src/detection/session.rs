use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::types::{Algorithm, DocumentId};
use crate::corpus::store::ReferenceCorpus;
use crate::detection::result::DetectionResult;
use crate::matching::engine::{MatchingConfig, MatchingEngine};

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("Unknown algorithm '{0}' (expected rabin-karp, kmp, boyer-moore, hamming or 1-4)")]
    UnknownAlgorithm(String),

    #[error("Session is {found}, expected {expected}")]
    InvalidState {
        expected: SessionState,
        found: SessionState,
    },
}

/// Lifecycle of a detection session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Initialized,
    Scanning,
    Finalized,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized => write!(f, "initialized"),
            Self::Scanning => write!(f, "scanning"),
            Self::Finalized => write!(f, "finalized"),
        }
    }
}

/// How many documents each sentence is checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Check every document, collecting all documents that contain the sentence
    #[default]
    Exhaustive,
    /// Stop at the first document that contains the sentence. Flags are the
    /// same as `Exhaustive`; the matched-document set may be smaller.
    FirstMatch,
}

/// Configuration for a detection session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionConfig {
    pub algorithm: Algorithm,
    pub matching: MatchingConfig,
    pub scan_mode: ScanMode,
}

impl DetectionConfig {
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            matching: MatchingConfig::default(),
            scan_mode: ScanMode::default(),
        }
    }

    #[must_use]
    pub fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    #[must_use]
    pub fn with_max_mismatches(mut self, max_mismatches: usize) -> Self {
        self.matching.max_mismatches = max_mismatches;
        self
    }
}

/// Checks every candidate sentence against every reference document with one
/// algorithm.
pub struct DetectionSession<'a> {
    sentences: Vec<String>,
    corpus: &'a ReferenceCorpus,
    engine: MatchingEngine,
    scan_mode: ScanMode,
    flags: Vec<bool>,
    matched_documents: BTreeSet<DocumentId>,
    state: SessionState,
}

impl<'a> DetectionSession<'a> {
    /// Create a session in the `Initialized` state
    pub fn new<I, S>(sentences: I, corpus: &'a ReferenceCorpus, config: DetectionConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sentences: Vec<String> = sentences.into_iter().map(Into::into).collect();
        let flags = vec![false; sentences.len()];

        Self {
            sentences,
            corpus,
            engine: MatchingEngine::with_config(config.algorithm, config.matching),
            scan_mode: config.scan_mode,
            flags,
            matched_documents: BTreeSet::new(),
            state: SessionState::Initialized,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Run every (sentence, document) pair through the matching engine.
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidState` unless the session is `Initialized`.
    pub fn scan(&mut self) -> Result<(), DetectionError> {
        self.expect_state(SessionState::Initialized)?;
        self.state = SessionState::Scanning;

        debug!(
            matcher = self.engine.matcher().name(),
            sentences = self.sentences.len(),
            documents = self.corpus.len(),
            "Scanning corpus"
        );

        for (i, sentence) in self.sentences.iter().enumerate() {
            for document in self.corpus.iter() {
                if !self.engine.find(&document.text, sentence) {
                    continue;
                }

                debug!(sentence = i, document = %document.id, "Sentence found in document");
                self.flags[i] = true;
                self.matched_documents.insert(document.id.clone());

                if self.scan_mode == ScanMode::FirstMatch {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Compute the detection result from the completed scan.
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidState` unless [`scan`](Self::scan) has
    /// completed and the session has not been finalized yet.
    pub fn finalize(&mut self) -> Result<DetectionResult, DetectionError> {
        self.expect_state(SessionState::Scanning)?;
        self.state = SessionState::Finalized;

        let result = DetectionResult::new(
            self.engine.algorithm(),
            std::mem::take(&mut self.flags),
            std::mem::take(&mut self.matched_documents),
        );

        info!(
            algorithm = %result.algorithm(),
            ratio = result.ratio(),
            matched = result.matched_sentences(),
            total = result.total_sentences(),
            documents = result.matched_documents().len(),
            "Detection finished"
        );

        Ok(result)
    }

    /// Scan and finalize in one step.
    ///
    /// # Errors
    ///
    /// Returns `DetectionError::InvalidState` if the session was already scanned.
    pub fn run(mut self) -> Result<DetectionResult, DetectionError> {
        self.scan()?;
        self.finalize()
    }

    fn expect_state(&self, expected: SessionState) -> Result<(), DetectionError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(DetectionError::InvalidState {
                expected,
                found: self.state,
            })
        }
    }
}

/// Run an exhaustive exact-matching session over `sentences` and `corpus`.
///
/// # Errors
///
/// Propagates session errors; a fresh session never produces them in practice.
///
/// # Examples
///
/// ```
/// use plagcheck::{detect, Algorithm, ReferenceCorpus};
///
/// let corpus = ReferenceCorpus::new().with_document("doc1", "a.").unwrap();
/// let result = detect(["a", "b"], &corpus, Algorithm::RollingHash).unwrap();
/// assert_eq!(result.ratio(), 50.0);
/// ```
pub fn detect<I, S>(
    sentences: I,
    corpus: &ReferenceCorpus,
    algorithm: Algorithm,
) -> Result<DetectionResult, DetectionError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DetectionSession::new(sentences, corpus, DetectionConfig::new(algorithm)).run()
}
