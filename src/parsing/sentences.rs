use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::utils::validation::{check_sentence_limit, MAX_SENTENCES};

/// Sentence terminator used both to split candidates and to strip references
pub const SENTENCE_TERMINATOR: char = '.';

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Too many sentences (maximum {MAX_SENTENCES})")]
    TooManySentences,
}

/// Read a whole text file, or stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read or is not UTF-8.
pub fn read_text(path: &Path) -> Result<String, ParseError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Read a candidate document and split it into sentences.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::TooManySentences` if the limit is exceeded.
pub fn read_sentences(path: &Path) -> Result<Vec<String>, ParseError> {
    split_sentences(&read_text(path)?)
}

/// Split text into sentences on `.`.
///
/// Only terminated sentences count: text after the final `.` is dropped.
/// Each sentence is trimmed and empty pieces are dropped. The terminator
/// itself is not kept.
///
/// # Errors
///
/// Returns `ParseError::TooManySentences` if the text holds more than
/// [`MAX_SENTENCES`] sentences.
///
/// # Examples
///
/// ```
/// use plagcheck::parsing::sentences::split_sentences;
///
/// let sentences = split_sentences("The cat sat. The dog ran.\n").unwrap();
/// assert_eq!(sentences, vec!["The cat sat", "The dog ran"]);
/// ```
pub fn split_sentences(text: &str) -> Result<Vec<String>, ParseError> {
    let mut sentences = Vec::new();
    let terminated = text
        .rfind(SENTENCE_TERMINATOR)
        .map_or("", |end| &text[..end]);

    for piece in terminated.split(SENTENCE_TERMINATOR) {
        let sentence = piece.trim();
        if sentence.is_empty() {
            continue;
        }
        if check_sentence_limit(sentences.len()).is_some() {
            return Err(ParseError::TooManySentences);
        }
        sentences.push(sentence.to_string());
    }

    Ok(sentences)
}

/// Normalize a reference document for searching by removing every `.`.
///
/// Candidate sentences never contain the terminator, so stripping it from
/// the reference lets a sentence match where the reference ends it.
///
/// # Examples
///
/// ```
/// use plagcheck::parsing::sentences::reference_text;
///
/// assert_eq!(reference_text("a. b."), "a b");
/// ```
#[must_use]
pub fn reference_text(raw: &str) -> String {
    raw.chars().filter(|&c| c != SENTENCE_TERMINATOR).collect()
}
