//! Polynomial string hashing.
//!
//! `h = (h * BASE + byte) mod MODULUS`, applied to each byte in order. The
//! hash is order-sensitive, so anagrams hash differently, but distinct strings
//! can still collide: `"Aa"` and `"BB"` both hash to 2112. Never treat equal
//! hashes as proof of equal content.

/// Multiplier applied per byte
pub const BASE: u64 = 31;

/// Prime modulus keeping hashes below 2^30
pub const MODULUS: u64 = 1_000_000_007;

/// Hash a byte string.
///
/// # Examples
///
/// ```
/// use plagcheck::matching::hashing::hash;
///
/// assert_eq!(hash(b""), 0);
/// assert_eq!(hash(b"ab"), (97 * 31 + 98) % 1_000_000_007);
/// assert_ne!(hash(b"ab"), hash(b"ba"));
/// ```
#[must_use]
pub fn hash(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0, |h, &b| (h * BASE + u64::from(b)) % MODULUS)
}

/// Hash of a fixed-width window that can slide forward one byte at a time.
///
/// The value after every [`roll`](Self::roll) equals [`hash`] of the new window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    value: u64,
    /// `BASE^(width - 1) mod MODULUS`, the weight of the outgoing byte
    high_weight: u64,
}

impl RollingHash {
    /// Start a rolling hash over the initial window.
    #[must_use]
    pub fn new(window: &[u8]) -> Self {
        let high_weight = (1..window.len()).fold(1, |w, _| (w * BASE) % MODULUS);
        Self {
            value: hash(window),
            high_weight,
        }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Slide the window: drop `outgoing` from the front, append `incoming`.
    pub fn roll(&mut self, outgoing: u8, incoming: u8) {
        let removed = (u64::from(outgoing) * self.high_weight) % MODULUS;
        let without = (self.value + MODULUS - removed) % MODULUS;
        self.value = (without * BASE + u64::from(incoming)) % MODULUS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash(b"the cat sat"), hash(b"the cat sat"));
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        assert_ne!(hash(b"listen"), hash(b"silent"));
        assert_ne!(hash(b"abc"), hash(b"cba"));
    }

    #[test]
    fn test_known_collision() {
        // 'A' * 31 + 'a' == 'B' * 31 + 'B'
        assert_eq!(hash(b"Aa"), hash(b"BB"));
        assert_eq!(hash(b"AaAa"), hash(b"BBBB"));
    }

    #[test]
    fn test_hash_stays_below_modulus() {
        let long = vec![0xFFu8; 10_000];
        assert!(hash(&long) < MODULUS);
    }

    #[test]
    fn test_rolling_matches_direct_hash() {
        let text = b"Rolling hashes slide across every window of the text.";
        let width = 7;

        let mut rolling = RollingHash::new(&text[..width]);
        assert_eq!(rolling.value(), hash(&text[..width]));

        for start in 1..=text.len() - width {
            rolling.roll(text[start - 1], text[start + width - 1]);
            assert_eq!(
                rolling.value(),
                hash(&text[start..start + width]),
                "window at offset {start}"
            );
        }
    }

    #[test]
    fn test_rolling_single_byte_window() {
        let mut rolling = RollingHash::new(b"a");
        rolling.roll(b'a', b'z');
        assert_eq!(rolling.value(), hash(b"z"));
    }

    #[test]
    fn test_rolling_high_bytes() {
        let text = [0xFFu8, 0xFE, 0x80, 0x00, 0xFF, 0x7F];
        let mut rolling = RollingHash::new(&text[..3]);
        for start in 1..=3 {
            rolling.roll(text[start - 1], text[start + 2]);
            assert_eq!(rolling.value(), hash(&text[start..start + 3]));
        }
    }
}
