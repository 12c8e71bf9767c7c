//! Decision model: the Allow/Deny outcome and the closed denial taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolver::ResolverError;

/// Why an operation was denied. A closed set: rule logic and callers match
/// on variants, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    #[error("subject is neither owner nor granted full access")]
    NotOwnerOrNoFullAccess,
    #[error("subject is not within the attendee scope")]
    NotAttendee,
    #[error("subject is not the employee, manager or replacement")]
    NotEmployeeManagerOrReplacement,
    #[error("subjects may not approve their own vacation")]
    NotAllowedToApprove,
    #[error("object is no longer in an editable status")]
    ImmutableStatus,
    #[error("date range is outside the editable window")]
    OutsideEditableWindow,
    #[error("special-category vacations require HR approval")]
    SpecialCategoryRequiresHr,
    #[error("file exceeds the maximum allowed size")]
    FileTooLarge,
}

/// Outcome of a policy evaluation. Every denial carries a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason) => Some(*reason),
        }
    }
}

/// Failure surfaced by the strict and lenient engine entry points.
///
/// `Denied` is a normal policy outcome; `ResolverUnavailable` is an
/// infrastructure failure and propagates in both modes.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("access denied: {0}")]
    Denied(DenyReason),
    #[error("group membership lookup failed")]
    ResolverUnavailable(#[from] ResolverError),
}
