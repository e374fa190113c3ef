//! Runtime configuration for the task lifecycle service.

use crate::task::policy::{AuthorizationPolicy, UnclaimedDeletionPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the task lifecycle service.
///
/// # Examples
///
/// ```
/// use taskward::task::{policy::UnclaimedDeletionPolicy, services::TaskRuntimeConfig};
///
/// let config = TaskRuntimeConfig::from_json_str(
///     r#"{ "unclaimed_deletion": "admin_only", "max_page_size": 25 }"#,
/// )
/// .expect("valid configuration");
/// assert_eq!(config.unclaimed_deletion, UnclaimedDeletionPolicy::AdminOnly);
/// assert_eq!(config.max_page_size, Some(25));
/// assert_eq!(config.max_conflict_retries, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskRuntimeConfig {
    /// Who may delete a task that has no assignee.
    pub unclaimed_deletion: UnclaimedDeletionPolicy,
    /// Largest page returned by listings; `None` leaves sizes to the caller.
    pub max_page_size: Option<usize>,
    /// Re-evaluations after a compare-and-update conflict before giving up.
    pub max_conflict_retries: u32,
}

impl Default for TaskRuntimeConfig {
    fn default() -> Self {
        Self {
            unclaimed_deletion: UnclaimedDeletionPolicy::Candidates,
            max_page_size: None,
            max_conflict_retries: 8,
        }
    }
}

impl TaskRuntimeConfig {
    /// Creates a strict configuration.
    ///
    /// Only administrators may delete unclaimed tasks and listings are
    /// capped at 100 items per page.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            unclaimed_deletion: UnclaimedDeletionPolicy::AdminOnly,
            max_page_size: Some(100),
            max_conflict_retries: 8,
        }
    }

    /// Parses a configuration from JSON. Missing fields take their default
    /// values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRuntimeConfigError::Parse`] for malformed JSON or
    /// unknown fields, and [`TaskRuntimeConfigError::ZeroPageSize`] when
    /// `max_page_size` is zero.
    pub fn from_json_str(json: &str) -> Result<Self, TaskRuntimeConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.max_page_size == Some(0) {
            return Err(TaskRuntimeConfigError::ZeroPageSize);
        }
        Ok(config)
    }

    /// Returns the authorization rules derived from this configuration.
    #[must_use]
    pub const fn authorization_policy(&self) -> AuthorizationPolicy {
        AuthorizationPolicy::new(self.unclaimed_deletion)
    }
}

/// Errors returned while loading a [`TaskRuntimeConfig`].
#[derive(Debug, Error)]
pub enum TaskRuntimeConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid task runtime configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A page size cap of zero would make every listing fail.
    #[error("max_page_size must be at least 1")]
    ZeroPageSize,
}
