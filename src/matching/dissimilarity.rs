//! Fixed-length Hamming dissimilarity matching.

use crate::matching::engine::Matcher;

/// Sliding-window Hamming matcher.
///
/// `max_mismatches` is 0 for exact matching; a positive threshold accepts
/// near-duplicate windows of the same length as the pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming {
    pub max_mismatches: usize,
}

impl Matcher for Hamming {
    fn name(&self) -> &'static str {
        "Hamming Distance"
    }

    fn matches(&self, text: &[u8], pattern: &[u8]) -> bool {
        matches_within(text, pattern, self.max_mismatches)
    }
}

/// Number of positions at which `a` and `b` differ.
///
/// Both inputs must have the same length.
///
/// # Examples
///
/// ```
/// use plagcheck::matching::dissimilarity::distance;
///
/// assert_eq!(distance(b"karolin", b"kathrin"), 3);
/// assert_eq!(distance(b"same", b"same"), 0);
/// ```
#[must_use]
pub fn distance(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len(), "distance requires equal-length inputs");
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Return true if some window of `text` equals `pattern`.
#[must_use]
pub fn matches(text: &[u8], pattern: &[u8]) -> bool {
    matches_within(text, pattern, 0)
}

/// Return true if some `pattern.len()`-byte window of `text` differs from
/// `pattern` in at most `max_mismatches` positions.
#[must_use]
pub fn matches_within(text: &[u8], pattern: &[u8], max_mismatches: usize) -> bool {
    if pattern.len() > text.len() {
        return false;
    }
    (0..=text.len() - pattern.len())
        .any(|start| distance(&text[start..start + pattern.len()], pattern) <= max_mismatches)
}
