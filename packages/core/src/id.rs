//! Shared validation for string identifiers.

use thiserror::Error;
use ulid::Ulid;

/// Errors produced when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("identifier must not be empty")]
    Empty,
    #[error("identifier must not contain whitespace: {0:?}")]
    Whitespace(String),
}

/// Validate a raw identifier and return an owned copy.
pub(crate) fn validate(raw: &str) -> Result<String, IdError> {
    if raw.is_empty() {
        return Err(IdError::Empty);
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(IdError::Whitespace(raw.to_string()));
    }
    Ok(raw.to_string())
}

/// Generate a fresh identifier string (ULID, chronologically sortable).
pub(crate) fn generate() -> String {
    Ulid::new().to_string().to_lowercase()
}
