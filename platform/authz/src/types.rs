//! Subject and operation model.

use std::collections::HashSet;

use entity::UserId;
use serde::{Deserialize, Serialize};

/// Elevated role flags a subject may carry beyond plain identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleFlag {
    /// HR staff; overrides per-object vacation rules.
    HrAccess,
}

/// The authenticated actor requesting an operation. Immutable per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub user_id: UserId,
    pub roles: HashSet<RoleFlag>,
}

impl Subject {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            roles: HashSet::new(),
        }
    }

    pub fn with_role(mut self, role: RoleFlag) -> Self {
        self.roles.insert(role);
        self
    }

    pub fn has_role(&self, role: RoleFlag) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_hr(&self) -> bool {
        self.has_role(RoleFlag::HrAccess)
    }
}

/// Operations a policy can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
    /// Audit-trail visibility.
    History,
}
