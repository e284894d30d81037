//! Sentence-by-document plagiarism detection.
//!
//! A [`DetectionSession`] owns the candidate sentences, a flag per sentence
//! and the set of matched documents. It moves through three states:
//!
//! 1. **Initialized**: sentences, corpus and algorithm are fixed
//! 2. **Scanning**: every sentence is checked against every document
//! 3. **Finalized**: the [`DetectionResult`] has been computed
//!
//! The ratio is `flagged sentences / total sentences * 100`, or 0 when there
//! are no sentences.
//!
//! ## Example
//!
//! ```rust
//! use plagcheck::{Algorithm, DetectionConfig, DetectionSession, ReferenceCorpus};
//!
//! let corpus = ReferenceCorpus::new()
//!     .with_document("doc1", "the cat sat")
//!     .unwrap();
//!
//! let session = DetectionSession::new(
//!     ["the cat sat", "the dog ran"],
//!     &corpus,
//!     DetectionConfig::new(Algorithm::PrefixFunction),
//! );
//! let result = session.run().unwrap();
//!
//! assert_eq!(result.ratio(), 50.0);
//! ```

pub mod result;
pub mod session;

pub use result::DetectionResult;
pub use session::{
    detect, DetectionConfig, DetectionError, DetectionSession, ScanMode, SessionState,
};
