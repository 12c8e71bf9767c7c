//! Decision engine: one evaluation, two calling conventions.
//!
//! Policies implement [`AccessPolicy::evaluate`] and nothing else. The
//! engine derives the lenient boolean form (`check`) and the strict failing
//! form (`require`) from that single evaluation, so `require` succeeds
//! exactly when `check` returns true.

use tracing::debug;

use crate::decision::{AccessError, Decision};
use crate::resolver::ResolverError;
use crate::types::{Operation, Subject};

/// Per-entity access rules.
///
/// `candidate` is the in-memory object the operation targets (`None` for a
/// list-level Select probe); `previous` is the last persisted snapshot,
/// supplied by the caller for Update/Delete when field-change rules apply.
/// Evaluation must be pure given its arguments.
pub trait AccessPolicy {
    type Object;

    fn evaluate(
        &self,
        subject: &Subject,
        operation: Operation,
        candidate: Option<&Self::Object>,
        previous: Option<&Self::Object>,
    ) -> Result<Decision, ResolverError>;
}

/// Wraps any [`AccessPolicy`] with the dual strict/lenient surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessDecisionEngine;

impl AccessDecisionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate<P: AccessPolicy>(
        &self,
        policy: &P,
        subject: &Subject,
        operation: Operation,
        candidate: Option<&P::Object>,
        previous: Option<&P::Object>,
    ) -> Result<Decision, ResolverError> {
        let decision = policy.evaluate(subject, operation, candidate, previous)?;
        debug!(subject = %subject.user_id, ?operation, ?decision, "access decision");
        Ok(decision)
    }

    /// Lenient form: `Ok(false)` on a normal denial. Only a resolver outage
    /// errors, and it errors in both modes.
    pub fn check<P: AccessPolicy>(
        &self,
        policy: &P,
        subject: &Subject,
        operation: Operation,
        candidate: Option<&P::Object>,
        previous: Option<&P::Object>,
    ) -> Result<bool, AccessError> {
        let decision = self.evaluate(policy, subject, operation, candidate, previous)?;
        Ok(decision.is_allowed())
    }

    /// Strict form: a denial surfaces as [`AccessError::Denied`].
    pub fn require<P: AccessPolicy>(
        &self,
        policy: &P,
        subject: &Subject,
        operation: Operation,
        candidate: Option<&P::Object>,
        previous: Option<&P::Object>,
    ) -> Result<(), AccessError> {
        match self.evaluate(policy, subject, operation, candidate, previous)? {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(AccessError::Denied(reason)),
        }
    }
}
