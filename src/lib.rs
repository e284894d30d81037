//! # plagcheck
//!
//! A library for finding sentences of a candidate document that reappear
//! verbatim in a corpus of reference documents.
//!
//! Each sentence is searched in each reference text with one of four
//! interchangeable exact-substring algorithms. They share one contract and
//! always agree on whether a sentence occurs, so the choice only affects speed.
//!
//! ## Features
//!
//! - **Rabin-Karp**: Polynomial rolling hash, verified byte by byte on every hash hit
//! - **Knuth-Morris-Pratt**: Linear scan driven by the prefix function
//! - **Boyer-Moore**: Right-to-left comparison with bad-character skips
//! - **Hamming distance**: Sliding-window mismatch count, optionally tolerant
//! - **Detection sessions**: Per-sentence flags, matched documents, plagiarism ratio
//!
//! ## Example
//!
//! ```rust
//! use plagcheck::{detect, Algorithm, ReferenceCorpus};
//! use plagcheck::parsing::sentences::split_sentences;
//!
//! let corpus = ReferenceCorpus::new()
//!     .with_document("doc1", "a")
//!     .unwrap();
//!
//! let sentences = split_sentences("a. b.").unwrap();
//! let result = detect(sentences, &corpus, Algorithm::BadCharacter).unwrap();
//!
//! assert_eq!(result.ratio(), 50.0);
//! for id in result.matched_documents() {
//!     println!("plagiarized from {id}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Algorithm selector and document types
//! - [`matching`]: The four matchers and the dispatching engine
//! - [`detection`]: Detection sessions and results
//! - [`corpus`]: In-memory reference corpus
//! - [`parsing`]: Sentence splitting and reference text normalization
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod corpus;
pub mod detection;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::document::ReferenceDocument;
pub use core::types::*;
pub use corpus::store::ReferenceCorpus;
pub use detection::{
    detect, DetectionConfig, DetectionError, DetectionResult, DetectionSession, ScanMode,
};
pub use matching::engine::{find, Matcher, MatchingConfig, MatchingEngine};
