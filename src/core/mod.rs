//! Core data types for sentence-level plagiarism detection.
//!
//! - [`Algorithm`]: Which string-matching algorithm a session uses
//! - [`DocumentId`]: Identifier of a reference document
//! - [`ReferenceDocument`]: An identified reference text from the corpus
//!
//! ## Algorithms
//!
//! | Id | Name | Technique |
//! |----|------|-----------|
//! | 1  | Rabin-Karp | Polynomial rolling hash, verified on hash equality |
//! | 2  | Knuth-Morris-Pratt | Prefix-function automaton |
//! | 3  | Boyer-Moore | Bad-character skip table |
//! | 4  | Hamming Distance | Sliding-window mismatch count |
//!
//! All four agree on exact matches: a sentence is found by one iff it is
//! found by all of them.

pub mod document;
pub mod types;
