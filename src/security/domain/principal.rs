//! Authenticated principal value.

use super::{GroupId, SecurityDomainError, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An authenticated identity with its group memberships.
///
/// Principals are plain values: the runtime receives them explicitly with
/// every operation and never looks them up from process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    id: UserId,
    groups: BTreeSet<GroupId>,
    admin: bool,
}

impl Principal {
    /// Creates a non-admin principal without group memberships.
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self {
            id,
            groups: BTreeSet::new(),
            admin: false,
        }
    }

    /// Parses a non-admin principal from raw identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityDomainError`] when the user or any group identifier
    /// is invalid.
    pub fn parse<I, G>(id: impl Into<String>, groups: I) -> Result<Self, SecurityDomainError>
    where
        I: IntoIterator<Item = G>,
        G: Into<String>,
    {
        let parsed_groups = groups
            .into_iter()
            .map(GroupId::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self::new(UserId::new(id)?).with_groups(parsed_groups))
    }

    /// Sets the group memberships.
    #[must_use]
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = GroupId>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    /// Marks the principal as an administrator.
    #[must_use]
    pub const fn as_admin(mut self) -> Self {
        self.admin = true;
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the group memberships.
    #[must_use]
    pub const fn groups(&self) -> &BTreeSet<GroupId> {
        &self.groups
    }

    /// Returns whether the principal holds the administrator role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.admin
    }

    /// Returns whether the principal is a member of `group`.
    #[must_use]
    pub fn is_member_of(&self, group: &GroupId) -> bool {
        self.groups.contains(group)
    }

    /// Returns whether the principal belongs to any of `groups`.
    #[must_use]
    pub fn is_member_of_any(&self, groups: &BTreeSet<GroupId>) -> bool {
        !self.groups.is_disjoint(groups)
    }
}
