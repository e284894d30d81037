//! Text ingestion for candidate and reference documents.
//!
//! - **Candidate documents** are split into sentences on `.`
//! - **Reference documents** are read whole, with every `.` removed
//!
//! ## Example
//!
//! ```rust
//! use plagcheck::parsing::sentences::{reference_text, split_sentences};
//!
//! let sentences = split_sentences("a. b.").unwrap();
//! let reference = reference_text("a.");
//!
//! assert_eq!(sentences, vec!["a", "b"]);
//! assert_eq!(reference, "a");
//! ```

pub mod sentences;
