//! Port for resolving authenticated principals and their group memberships.

use crate::security::domain::{Principal, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for principal resolution.
pub type SecurityResult<T> = Result<T, SecurityError>;

/// Resolves a user identifier into an authenticated principal.
///
/// Implementations own authentication and group-membership lookup; the task
/// runtime only consumes the resolved [`Principal`].
#[async_trait]
pub trait PrincipalProvider: Send + Sync {
    /// Returns the principal for `user`, including group memberships and the
    /// administrator flag.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::UnknownUser`] when the user is not known, or
    /// [`SecurityError::Backend`] when the identity backend fails.
    async fn principal(&self, user: &UserId) -> SecurityResult<Principal>;
}

/// Errors returned by principal providers.
#[derive(Debug, Clone, Error)]
pub enum SecurityError {
    /// No user with the identifier exists.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// The identity backend failed.
    #[error("identity backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl SecurityError {
    /// Wraps an identity backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
