//! Poll access rules.
//!
//! Full access means: owner, directly listed full-access user, or member of
//! a full-access group. Groups are expanded through the injected resolver,
//! and only when a direct grant has not already settled the question.
//! Attendee lists arrive pre-flattened (group attendees are merged into
//! `attendee_user_ids` by the caller's membership step).

use entity::Poll;

use crate::decision::{Decision, DenyReason};
use crate::engine::AccessPolicy;
use crate::resolver::{GroupMembershipResolver, ResolverError};
use crate::types::{Operation, Subject};

pub struct PollPolicy<'r> {
    resolver: &'r dyn GroupMembershipResolver,
}

impl<'r> PollPolicy<'r> {
    pub fn new(resolver: &'r dyn GroupMembershipResolver) -> Self {
        Self { resolver }
    }

    fn has_full_access(&self, subject: &Subject, poll: &Poll) -> Result<bool, ResolverError> {
        if poll.owner_id == Some(subject.user_id) {
            return Ok(true);
        }
        if poll.full_access_user_ids.contains(&subject.user_id) {
            return Ok(true);
        }
        if poll.full_access_group_ids.is_empty() {
            return Ok(false);
        }
        let members = self.resolver.resolve(&poll.full_access_group_ids)?;
        Ok(members.contains(&subject.user_id))
    }

    fn is_attendee(subject: &Subject, poll: &Poll) -> bool {
        poll.attendee_user_ids.contains(&subject.user_id)
    }
}

impl AccessPolicy for PollPolicy<'_> {
    type Object = Poll;

    fn evaluate(
        &self,
        subject: &Subject,
        operation: Operation,
        candidate: Option<&Poll>,
        _previous: Option<&Poll>,
    ) -> Result<Decision, ResolverError> {
        let decision = match operation {
            // Any authenticated subject may create a poll.
            Operation::Insert => Decision::Allow,
            Operation::Select => match candidate {
                // List-level probe; row filtering happens downstream.
                None => Decision::Allow,
                Some(poll) => {
                    if Self::is_attendee(subject, poll) || self.has_full_access(subject, poll)? {
                        Decision::Allow
                    } else {
                        Decision::Deny(DenyReason::NotAttendee)
                    }
                }
            },
            Operation::Update | Operation::Delete | Operation::History => match candidate {
                None => Decision::Deny(DenyReason::NotOwnerOrNoFullAccess),
                Some(poll) => {
                    if self.has_full_access(subject, poll)? {
                        Decision::Allow
                    } else {
                        Decision::Deny(DenyReason::NotOwnerOrNoFullAccess)
                    }
                }
            },
        };
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{StaticGroupResolver, UnavailableResolver};
    use entity::{GroupId, UserId};

    fn subject() -> Subject {
        Subject::new(UserId::random())
    }

    #[test]
    fn owner_has_full_lifecycle_access() {
        let owner = subject();
        let poll = Poll::owned_by(owner.user_id);
        let resolver = StaticGroupResolver::new();
        let policy = PollPolicy::new(&resolver);

        for operation in [
            Operation::Select,
            Operation::Update,
            Operation::Delete,
            Operation::History,
        ] {
            let decision = policy
                .evaluate(&owner, operation, Some(&poll), None)
                .expect("no group lookup needed");
            assert_eq!(decision, Decision::Allow, "{operation:?}");
        }
    }

    #[test]
    fn attendee_may_select_but_not_edit() {
        let attendee = subject();
        let poll = Poll::owned_by(UserId::random()).with_attendee(attendee.user_id);
        let resolver = StaticGroupResolver::new();
        let policy = PollPolicy::new(&resolver);

        let select = policy
            .evaluate(&attendee, Operation::Select, Some(&poll), None)
            .expect("no group lookup needed");
        assert_eq!(select, Decision::Allow);

        let update = policy
            .evaluate(&attendee, Operation::Update, Some(&poll), None)
            .expect("no group lookup needed");
        assert_eq!(update, Decision::Deny(DenyReason::NotOwnerOrNoFullAccess));
    }

    #[test]
    fn unrelated_subject_is_denied_select_as_non_attendee() {
        let stranger = subject();
        let poll = Poll::owned_by(UserId::random());
        let resolver = StaticGroupResolver::new();
        let policy = PollPolicy::new(&resolver);

        let decision = policy
            .evaluate(&stranger, Operation::Select, Some(&poll), None)
            .expect("no group lookup needed");
        assert_eq!(decision, Decision::Deny(DenyReason::NotAttendee));
    }

    #[test]
    fn insert_is_open_to_any_subject() {
        let stranger = subject();
        let resolver = StaticGroupResolver::new();
        let policy = PollPolicy::new(&resolver);

        let decision = policy
            .evaluate(&stranger, Operation::Insert, None, None)
            .expect("no group lookup needed");
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn select_without_candidate_is_a_list_probe() {
        let stranger = subject();
        let resolver = StaticGroupResolver::new();
        let policy = PollPolicy::new(&resolver);

        let decision = policy
            .evaluate(&stranger, Operation::Select, None, None)
            .expect("no group lookup needed");
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn group_membership_grants_full_access() {
        let member = subject();
        let group = GroupId::random();
        let poll = Poll::owned_by(UserId::random()).with_full_access_group(group);
        let resolver = StaticGroupResolver::new().with_group(group, [member.user_id]);
        let policy = PollPolicy::new(&resolver);

        let decision = policy
            .evaluate(&member, Operation::Update, Some(&poll), None)
            .expect("static resolver never fails");
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn direct_grant_never_consults_the_resolver() {
        let grantee = subject();
        let poll = Poll::owned_by(UserId::random())
            .with_full_access_user(grantee.user_id)
            .with_full_access_group(GroupId::random());
        let policy = PollPolicy::new(&UnavailableResolver);

        let decision = policy
            .evaluate(&grantee, Operation::Update, Some(&poll), None)
            .expect("direct grant short-circuits the lookup");
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn resolver_outage_is_not_a_denial() {
        let stranger = subject();
        let poll = Poll::owned_by(UserId::random()).with_full_access_group(GroupId::random());
        let policy = PollPolicy::new(&UnavailableResolver);

        let result = policy.evaluate(&stranger, Operation::Update, Some(&poll), None);
        assert!(result.is_err());
    }
}
