//! Reference corpus storage.
//!
//! The corpus is an injected, in-memory list of `(identifier, text)` pairs.
//! Texts are read once when the corpus is built and reused for every sentence
//! of a detection session; nothing in the matching core knows about file
//! names or how many documents exist.
//!
//! ## Example
//!
//! ```rust
//! use plagcheck::ReferenceCorpus;
//!
//! let corpus = ReferenceCorpus::new()
//!     .with_document("file1.txt", "It was the best of times")
//!     .unwrap()
//!     .with_document("file2.txt", "Call me Ishmael")
//!     .unwrap();
//!
//! assert_eq!(corpus.len(), 2);
//! ```
//!
//! ## Sources
//!
//! - [`ReferenceCorpus::load_from_dir`]: every `*.txt` file in a directory
//! - [`ReferenceCorpus::load_from_file`]: a JSON manifest written by
//!   [`ReferenceCorpus::to_json`]

pub mod store;
