//! Attribute-based access decisions for suite entities.
//!
//! Callers pre-load every attribute an access check needs (the acting
//! [`Subject`], the candidate object, and for updates the last persisted
//! snapshot) and ask a per-entity policy for a [`Decision`]. Evaluation is
//! pure: the only external call is the read-only [`GroupMembershipResolver`],
//! whose failure is infrastructure failure and never reads as an empty
//! membership.
//!
//! The [`AccessDecisionEngine`] derives the lenient (`check`) and strict
//! (`require`) calling conventions from the same evaluation, so the rules
//! exist exactly once.

pub mod decision;
pub mod engine;
pub mod policies;
pub mod resolver;
pub mod types;

pub use decision::{AccessError, Decision, DenyReason};
pub use engine::{AccessDecisionEngine, AccessPolicy};
pub use resolver::{GroupMembershipResolver, ResolverError, StaticGroupResolver, UnavailableResolver};
pub use types::{Operation, RoleFlag, Subject};
