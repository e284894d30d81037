//! String-matching engine.
//!
//! Four interchangeable substring search algorithms behind one contract:
//!
//! - [`rolling_hash`]: Rabin-Karp, polynomial hash per window, verified on every hash hit
//! - [`prefix_function`]: Knuth-Morris-Pratt, linear scan driven by the prefix function
//! - [`bad_character`]: Boyer-Moore, right-to-left comparison with bad-character skips
//! - [`dissimilarity`]: Hamming distance over a sliding window of pattern length
//!
//! [`engine::find`] and [`MatchingEngine`] dispatch a (text, pattern) pair to
//! exactly one of them, chosen by [`Algorithm`](crate::core::types::Algorithm).
//!
//! ## Example
//!
//! ```rust
//! use plagcheck::{Algorithm, MatchingEngine};
//!
//! let engine = MatchingEngine::new(Algorithm::BadCharacter);
//! assert!(engine.find("It was the best of times.", "best of times"));
//! ```
//!
//! All matchers work on bytes. A pattern longer than the text never matches,
//! and the empty pattern matches every text.

pub mod bad_character;
pub mod dissimilarity;
pub mod engine;
pub mod hashing;
pub mod prefix_function;
pub mod rolling_hash;

pub use engine::{find, Matcher, MatchingConfig, MatchingEngine};
