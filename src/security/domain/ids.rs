//! Identifier types for users and groups.

use super::SecurityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validates and normalizes a raw identifier.
fn normalize_identifier(
    raw: String,
    empty_error: SecurityDomainError,
) -> Result<String, SecurityDomainError> {
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(empty_error);
    }
    if normalized.chars().any(char::is_whitespace) {
        return Err(SecurityDomainError::WhitespaceInIdentifier(raw));
    }
    Ok(normalized.to_owned())
}

/// Identifier of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityDomainError::EmptyUserId`] when the value is blank,
    /// or [`SecurityDomainError::WhitespaceInIdentifier`] when it contains
    /// inner whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, SecurityDomainError> {
        normalize_identifier(value.into(), SecurityDomainError::EmptyUserId).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a user group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Creates a validated group identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityDomainError::EmptyGroupId`] when the value is blank,
    /// or [`SecurityDomainError::WhitespaceInIdentifier`] when it contains
    /// inner whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, SecurityDomainError> {
        normalize_identifier(value.into(), SecurityDomainError::EmptyGroupId).map(Self)
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GroupId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
