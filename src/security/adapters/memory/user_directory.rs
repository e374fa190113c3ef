//! In-memory user directory for tests and embedded use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::security::{
    domain::{Principal, UserId},
    ports::{PrincipalProvider, SecurityError, SecurityResult},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<HashMap<UserId, Principal>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a principal.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::Backend`] when the directory lock is
    /// poisoned.
    pub fn insert(&self, principal: Principal) -> SecurityResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|err| SecurityError::backend(std::io::Error::other(err.to_string())))?;
        users.insert(principal.id().clone(), principal);
        Ok(())
    }
}

#[async_trait]
impl PrincipalProvider for InMemoryUserDirectory {
    async fn principal(&self, user: &UserId) -> SecurityResult<Principal> {
        let users = self
            .users
            .read()
            .map_err(|err| SecurityError::backend(std::io::Error::other(err.to_string())))?;
        users
            .get(user)
            .cloned()
            .ok_or_else(|| SecurityError::UnknownUser(user.clone()))
    }
}
