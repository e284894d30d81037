use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::detection::DetectionError;

/// Unique identifier for a document in the reference corpus
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// String-matching algorithm used for an entire detection session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Rabin-Karp: polynomial rolling hash with verification
    RollingHash,
    /// Knuth-Morris-Pratt: prefix-function automaton
    PrefixFunction,
    /// Boyer-Moore with the bad-character rule
    BadCharacter,
    /// Sliding-window Hamming distance
    Dissimilarity,
}

impl Algorithm {
    /// All algorithms, in the order the original numeric identifiers assign them
    pub const ALL: [Algorithm; 4] = [
        Self::RollingHash,
        Self::PrefixFunction,
        Self::BadCharacter,
        Self::Dissimilarity,
    ];

    /// Numeric identifier (1-4)
    #[must_use]
    pub fn id(self) -> u8 {
        match self {
            Self::RollingHash => 1,
            Self::PrefixFunction => 2,
            Self::BadCharacter => 3,
            Self::Dissimilarity => 4,
        }
    }

    /// Short command-line name
    #[must_use]
    pub fn cli_name(self) -> &'static str {
        match self {
            Self::RollingHash => "rabin-karp",
            Self::PrefixFunction => "kmp",
            Self::BadCharacter => "boyer-moore",
            Self::Dissimilarity => "hamming",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RollingHash => write!(f, "Rabin-Karp"),
            Self::PrefixFunction => write!(f, "Knuth-Morris-Pratt"),
            Self::BadCharacter => write!(f, "Boyer-Moore"),
            Self::Dissimilarity => write!(f, "Hamming Distance"),
        }
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = DetectionError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| DetectionError::UnknownAlgorithm(id.to_string()))
    }
}

impl FromStr for Algorithm {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "1" | "rabin-karp" | "rabinkarp" | "rk" | "rolling-hash" => Ok(Self::RollingHash),
            "2" | "kmp" | "knuth-morris-pratt" | "prefix-function" => Ok(Self::PrefixFunction),
            "3" | "boyer-moore" | "boyermoore" | "bm" | "bad-character" => Ok(Self::BadCharacter),
            "4" | "hamming" | "hamming-distance" | "dissimilarity" => Ok(Self::Dissimilarity),
            _ => Err(DetectionError::UnknownAlgorithm(s.to_string())),
        }
    }
}
