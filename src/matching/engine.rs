use std::fmt::Debug;

use crate::core::types::Algorithm;
use crate::matching::bad_character::BoyerMoore;
use crate::matching::dissimilarity::Hamming;
use crate::matching::prefix_function::KnuthMorrisPratt;
use crate::matching::rolling_hash::RabinKarp;

/// A substring search strategy.
///
/// Implementations are stateless between calls and must agree on exact
/// matches: for any `text` and `pattern`, every matcher configured for exact
/// matching returns the same answer.
pub trait Matcher: Debug + Send + Sync {
    /// Human-readable algorithm name
    fn name(&self) -> &'static str;

    /// Return true if `pattern` occurs in `text`
    fn matches(&self, text: &[u8], pattern: &[u8]) -> bool;
}

impl Algorithm {
    /// The implementation of this algorithm under `config`
    #[must_use]
    pub fn matcher(self, config: &MatchingConfig) -> Box<dyn Matcher> {
        match self {
            Self::RollingHash => Box::new(RabinKarp),
            Self::PrefixFunction => Box::new(KnuthMorrisPratt),
            Self::BadCharacter => Box::new(BoyerMoore),
            Self::Dissimilarity => Box::new(Hamming {
                max_mismatches: config.max_mismatches,
            }),
        }
    }
}

/// Return true if `pattern` occurs in `text` according to `algorithm`.
///
/// Exactly one matcher runs per call.
///
/// # Examples
///
/// ```
/// use plagcheck::{find, Algorithm};
///
/// for algorithm in Algorithm::ALL {
///     assert!(find("the cat sat.", "the cat sat", algorithm));
///     assert!(!find("the dog ran.", "the cat sat", algorithm));
/// }
/// ```
#[must_use]
pub fn find(text: &str, pattern: &str, algorithm: Algorithm) -> bool {
    MatchingEngine::new(algorithm).find(text, pattern)
}

/// Configuration for the matching engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingConfig {
    /// Mismatches tolerated per window by the Hamming matcher. Ignored by
    /// the other algorithms, which always match exactly.
    pub max_mismatches: usize,
}

/// Dispatches (text, pattern) pairs to the selected matcher.
///
/// The matcher is resolved once at construction; every call goes through
/// the [`Matcher`] trait.
#[derive(Debug)]
pub struct MatchingEngine {
    algorithm: Algorithm,
    config: MatchingConfig,
    matcher: Box<dyn Matcher>,
}

impl MatchingEngine {
    /// Create an exact-matching engine for `algorithm`
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_config(algorithm, MatchingConfig::default())
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub fn with_config(algorithm: Algorithm, config: MatchingConfig) -> Self {
        let matcher = algorithm.matcher(&config);
        Self {
            algorithm,
            config,
            matcher,
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    #[must_use]
    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    /// Return true if `pattern` occurs in `text`
    #[must_use]
    pub fn find(&self, text: &str, pattern: &str) -> bool {
        self.find_bytes(text.as_bytes(), pattern.as_bytes())
    }

    /// Byte-level form of [`find`](Self::find)
    #[must_use]
    pub fn find_bytes(&self, text: &[u8], pattern: &[u8]) -> bool {
        self.matcher.matches(text, pattern)
    }
}
