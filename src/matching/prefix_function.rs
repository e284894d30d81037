//! Knuth-Morris-Pratt substring matching.

use crate::matching::engine::Matcher;

/// Prefix-function matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct KnuthMorrisPratt;

impl Matcher for KnuthMorrisPratt {
    fn name(&self) -> &'static str {
        "Knuth-Morris-Pratt"
    }

    fn matches(&self, text: &[u8], pattern: &[u8]) -> bool {
        matches(text, pattern)
    }
}

/// Compute the prefix function of `pattern`.
///
/// `table[k]` is the length of the longest proper prefix of `pattern[..=k]`
/// that is also a suffix of it.
///
/// # Examples
///
/// ```
/// use plagcheck::matching::prefix_function::prefix_table;
///
/// assert_eq!(prefix_table(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
/// ```
#[must_use]
pub fn prefix_table(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut border = 0;

    for i in 1..pattern.len() {
        while border > 0 && pattern[i] != pattern[border] {
            border = table[border - 1];
        }
        if pattern[i] == pattern[border] {
            border += 1;
        }
        table[i] = border;
    }

    table
}

/// Return true if `pattern` occurs in `text`. Linear in `text.len()`.
#[must_use]
pub fn matches(text: &[u8], pattern: &[u8]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    if pattern.len() > text.len() {
        return false;
    }

    let table = prefix_table(pattern);
    let mut i = 0;
    let mut j = 0;

    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == pattern.len() {
                return true;
            }
        } else if j > 0 {
            j = table[j - 1];
        } else {
            i += 1;
        }
    }

    false
}
