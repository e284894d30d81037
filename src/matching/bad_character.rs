//! Boyer-Moore substring matching with the bad-character rule.

use crate::matching::engine::Matcher;

/// Size of the byte alphabet
pub const ALPHABET_SIZE: usize = 256;

/// Bad-character matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct BoyerMoore;

impl Matcher for BoyerMoore {
    fn name(&self) -> &'static str {
        "Boyer-Moore"
    }

    fn matches(&self, text: &[u8], pattern: &[u8]) -> bool {
        matches(text, pattern)
    }
}

/// Rightmost index of every byte in `pattern`, or -1 when the byte is absent.
///
/// # Examples
///
/// ```
/// use plagcheck::matching::bad_character::last_occurrence;
///
/// let table = last_occurrence(b"abcab");
/// assert_eq!(table[usize::from(b'a')], 3);
/// assert_eq!(table[usize::from(b'c')], 2);
/// assert_eq!(table[usize::from(b'z')], -1);
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)] // slice indices fit in isize
pub fn last_occurrence(pattern: &[u8]) -> [isize; ALPHABET_SIZE] {
    let mut table = [-1; ALPHABET_SIZE];
    for (i, &b) in pattern.iter().enumerate() {
        table[usize::from(b)] = i as isize;
    }
    table
}

/// Return true if `pattern` occurs in `text`.
///
/// The pattern is compared right to left at each alignment. On a mismatch at
/// pattern index `j` against text byte `c`, the alignment advances by
/// `max(1, j - last_occurrence(c))`.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn matches(text: &[u8], pattern: &[u8]) -> bool {
    let m = pattern.len();
    let n = text.len();
    if m > n {
        return false;
    }

    let last = last_occurrence(pattern);
    let mut shift = 0;

    while shift <= n - m {
        let mut j = m as isize - 1;
        while j >= 0 && pattern[j as usize] == text[shift + j as usize] {
            j -= 1;
        }

        if j < 0 {
            return true;
        }

        let bad = text[shift + j as usize];
        shift += (j - last[usize::from(bad)]).max(1) as usize;
    }

    false
}
