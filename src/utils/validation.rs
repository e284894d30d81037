//! Centralized validation and resource limits.

/// Maximum number of documents in a reference corpus (DOS protection)
pub const MAX_DOCUMENTS: usize = 10_000;

/// Maximum number of sentences read from one candidate document
pub const MAX_SENTENCES: usize = 1_000_000;

/// Maximum length of a document identifier
pub const MAX_DOCUMENT_ID_LENGTH: usize = 255;

/// Check if adding another document would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new document.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_document_limit(count: usize) -> Option<String> {
    if count >= MAX_DOCUMENTS {
        Some(format!(
            "Too many documents: adding another would exceed maximum of {MAX_DOCUMENTS}"
        ))
    } else {
        None
    }
}

/// Check if adding another sentence would exceed the maximum allowed.
#[must_use]
pub fn check_sentence_limit(count: usize) -> Option<String> {
    if count >= MAX_SENTENCES {
        Some(format!(
            "Too many sentences: adding another would exceed maximum of {MAX_SENTENCES}"
        ))
    } else {
        None
    }
}

/// Document identifier validation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty document id")]
    EmptyId,
    #[error("Document id too long: exceeds {MAX_DOCUMENT_ID_LENGTH} characters")]
    IdTooLong,
    #[error("Document id contains control characters")]
    InvalidId,
}

/// Validate a document identifier.
///
/// Identifiers are shown to users in reports, so they must be non-blank,
/// bounded in length and free of control characters.
///
/// # Examples
///
/// ```
/// use plagcheck::utils::validation::validate_document_id;
///
/// assert!(validate_document_id("file1.txt").is_ok());
/// assert!(validate_document_id("").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::EmptyId` for blank ids, `ValidationError::IdTooLong`
/// past the length limit, or `ValidationError::InvalidId` for control characters.
pub fn validate_document_id(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyId);
    }
    if id.len() > MAX_DOCUMENT_ID_LENGTH {
        return Err(ValidationError::IdTooLong);
    }
    if id.chars().any(char::is_control) {
        return Err(ValidationError::InvalidId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_limit() {
        assert!(check_document_limit(0).is_none());
        assert!(check_document_limit(MAX_DOCUMENTS - 1).is_none());
        assert!(check_document_limit(MAX_DOCUMENTS).is_some());
    }

    #[test]
    fn test_sentence_limit() {
        assert!(check_sentence_limit(MAX_SENTENCES - 1).is_none());
        assert!(check_sentence_limit(MAX_SENTENCES).is_some());
    }

    #[test]
    fn test_validate_document_id() {
        assert_eq!(validate_document_id("file1.txt"), Ok(()));
        assert_eq!(validate_document_id("my notes (draft).txt"), Ok(()));
        assert_eq!(validate_document_id("   "), Err(ValidationError::EmptyId));
        assert_eq!(
            validate_document_id(&"x".repeat(MAX_DOCUMENT_ID_LENGTH + 1)),
            Err(ValidationError::IdTooLong)
        );
        assert_eq!(
            validate_document_id("bad\0name"),
            Err(ValidationError::InvalidId)
        );
        assert_eq!(
            validate_document_id("tab\tname"),
            Err(ValidationError::InvalidId)
        );
    }
}
