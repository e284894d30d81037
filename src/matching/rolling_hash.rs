//! Rabin-Karp substring matching.

use crate::matching::engine::Matcher;
use crate::matching::hashing::{hash, RollingHash};

/// Rolling-hash matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct RabinKarp;

impl Matcher for RabinKarp {
    fn name(&self) -> &'static str {
        "Rabin-Karp"
    }

    fn matches(&self, text: &[u8], pattern: &[u8]) -> bool {
        matches(text, pattern)
    }
}

/// Return true if `pattern` occurs in `text`.
///
/// Window hashes are compared against the pattern hash; every hash hit is
/// verified byte by byte and a failed verification continues the scan.
#[must_use]
pub fn matches(text: &[u8], pattern: &[u8]) -> bool {
    let m = pattern.len();
    if m > text.len() {
        return false;
    }

    let target = hash(pattern);
    let mut window = RollingHash::new(&text[..m]);

    for start in 0..=text.len() - m {
        if start > 0 {
            window.roll(text[start - 1], text[start + m - 1]);
        }
        if window.value() == target && &text[start..start + m] == pattern {
            return true;
        }
    }

    false
}
