use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollState {
    Running,
    Finished,
}

/// Access-relevant attributes of a poll.
///
/// Grant lists are sets of identifiers; an empty set grants nothing.
/// Group-expanded attendee lists are flattened into `attendee_user_ids` by
/// the caller before any access check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub owner_id: Option<UserId>,
    pub full_access_user_ids: HashSet<UserId>,
    pub full_access_group_ids: HashSet<GroupId>,
    pub attendee_user_ids: HashSet<UserId>,
    pub attendee_group_ids: HashSet<GroupId>,
    pub state: PollState,
}

impl Poll {
    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner_id: Some(owner),
            full_access_user_ids: HashSet::new(),
            full_access_group_ids: HashSet::new(),
            attendee_user_ids: HashSet::new(),
            attendee_group_ids: HashSet::new(),
            state: PollState::Running,
        }
    }

    pub fn with_full_access_user(mut self, user: UserId) -> Self {
        self.full_access_user_ids.insert(user);
        self
    }

    pub fn with_full_access_group(mut self, group: GroupId) -> Self {
        self.full_access_group_ids.insert(group);
        self
    }

    pub fn with_attendee(mut self, user: UserId) -> Self {
        self.attendee_user_ids.insert(user);
        self
    }

    pub fn with_attendee_group(mut self, group: GroupId) -> Self {
        self.attendee_group_ids.insert(group);
        self
    }

    pub fn with_state(mut self, state: PollState) -> Self {
        self.state = state;
        self
    }
}
