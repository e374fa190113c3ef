//! Error types for security domain validation.

use thiserror::Error;

/// Errors returned while constructing security domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecurityDomainError {
    /// The user identifier is empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// The group identifier is empty after trimming.
    #[error("group identifier must not be empty")]
    EmptyGroupId,

    /// An identifier contains whitespace.
    #[error("identifier '{0}' must not contain whitespace")]
    WhitespaceInIdentifier(String),
}
