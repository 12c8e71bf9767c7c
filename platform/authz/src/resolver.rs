//! Group-membership resolution seam.
//!
//! In production this is backed by a directory lookup and may block or fail.
//! Failure stays distinguishable from an empty result: a policy must never
//! treat an outage as "no members" and fail open.

use std::collections::{HashMap, HashSet};

use entity::{GroupId, UserId};
use thiserror::Error;

/// Group-membership lookup failure.
#[derive(Debug, Clone, Error)]
#[error("group membership lookup failed: {reason}")]
pub struct ResolverError {
    reason: String,
}

impl ResolverError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Resolves a set of groups to the union of their members.
pub trait GroupMembershipResolver {
    fn resolve(&self, groups: &HashSet<GroupId>) -> Result<HashSet<UserId>, ResolverError>;
}

/// In-memory resolver backed by a fixed group table.
#[derive(Debug, Clone, Default)]
pub struct StaticGroupResolver {
    groups: HashMap<GroupId, HashSet<UserId>>,
}

impl StaticGroupResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: GroupId, members: impl IntoIterator<Item = UserId>) -> Self {
        self.groups
            .entry(group)
            .or_default()
            .extend(members);
        self
    }
}

impl GroupMembershipResolver for StaticGroupResolver {
    fn resolve(&self, groups: &HashSet<GroupId>) -> Result<HashSet<UserId>, ResolverError> {
        let mut members = HashSet::new();
        for group in groups {
            if let Some(users) = self.groups.get(group) {
                members.extend(users.iter().copied());
            }
        }
        Ok(members)
    }
}

/// Resolver double that always fails; models a directory-service outage.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableResolver;

impl GroupMembershipResolver for UnavailableResolver {
    fn resolve(&self, _groups: &HashSet<GroupId>) -> Result<HashSet<UserId>, ResolverError> {
        Err(ResolverError::new("membership directory unavailable"))
    }
}
