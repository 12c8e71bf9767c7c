//! Vacation access rules.
//!
//! Rule order is first-match-wins: the self-approval prohibition, then the
//! HR override, then the role-specific rule for the operation, then Deny.
//! Evaluation is anchored to a fixed `today` so that date-window decisions
//! are reproducible.

use chrono::{Local, NaiveDate};
use entity::{Vacation, VacationStatus};

use crate::decision::{Decision, DenyReason};
use crate::engine::AccessPolicy;
use crate::resolver::ResolverError;
use crate::types::{Operation, Subject};

#[derive(Debug, Clone, Copy)]
pub struct VacationPolicy {
    today: NaiveDate,
}

impl VacationPolicy {
    pub fn new() -> Self {
        Self::anchored_at(Local::now().date_naive())
    }

    /// Evaluate against an explicit current date.
    pub fn anchored_at(today: NaiveDate) -> Self {
        Self { today }
    }

    fn decide(
        &self,
        subject: &Subject,
        operation: Operation,
        candidate: Option<&Vacation>,
        previous: Option<&Vacation>,
    ) -> Decision {
        let Some(vacation) = candidate else {
            return match operation {
                // List-level probe; row filtering happens downstream.
                Operation::Select => Decision::Allow,
                _ => Decision::Deny(DenyReason::NotEmployeeManagerOrReplacement),
            };
        };

        let is_employee = vacation.employee_id == subject.user_id;
        let is_manager = vacation.manager_id == subject.user_id;

        // The self-approval prohibition precedes everything, including the
        // HR override: nobody acts as their own manager on the update path.
        if operation == Operation::Update && is_employee && is_manager {
            return Decision::Deny(DenyReason::NotAllowedToApprove);
        }

        if subject.is_hr() {
            return Decision::Allow;
        }

        match operation {
            Operation::Select | Operation::History => {
                if is_employee || is_manager || vacation.replacement_id == subject.user_id {
                    Decision::Allow
                } else {
                    Decision::Deny(DenyReason::NotEmployeeManagerOrReplacement)
                }
            }
            Operation::Insert => self.decide_insert(is_employee, vacation),
            Operation::Update => {
                if is_employee {
                    self.decide_employee_update(vacation, previous)
                } else if is_manager {
                    self.decide_manager_update(vacation, previous)
                } else {
                    Decision::Deny(DenyReason::NotEmployeeManagerOrReplacement)
                }
            }
            Operation::Delete => {
                if !is_employee
                    || previous.is_some_and(|prev| prev.employee_id != subject.user_id)
                {
                    Decision::Deny(DenyReason::NotEmployeeManagerOrReplacement)
                } else if vacation.status != VacationStatus::InProgress {
                    Decision::Deny(DenyReason::ImmutableStatus)
                } else {
                    Decision::Allow
                }
            }
        }
    }

    fn decide_insert(&self, is_employee: bool, vacation: &Vacation) -> Decision {
        if !is_employee {
            return Decision::Deny(DenyReason::NotEmployeeManagerOrReplacement);
        }
        // Employees submit requests, they do not insert pre-approved ones.
        if vacation.status != VacationStatus::InProgress {
            return Decision::Deny(DenyReason::ImmutableStatus);
        }
        if vacation.start_date < self.today {
            return Decision::Deny(DenyReason::OutsideEditableWindow);
        }
        Decision::Allow
    }

    fn decide_employee_update(&self, vacation: &Vacation, previous: Option<&Vacation>) -> Decision {
        if let Some(previous) = previous {
            if previous.employee_id != vacation.employee_id {
                return Decision::Deny(DenyReason::NotEmployeeManagerOrReplacement);
            }
            if previous.status != VacationStatus::InProgress {
                return Decision::Deny(DenyReason::ImmutableStatus);
            }
            if !Self::only_employee_fields_changed(vacation, previous) {
                return Decision::Deny(DenyReason::NotEmployeeManagerOrReplacement);
            }
        }
        if vacation.status != VacationStatus::InProgress {
            return Decision::Deny(DenyReason::ImmutableStatus);
        }
        if vacation.start_date < self.today {
            return Decision::Deny(DenyReason::OutsideEditableWindow);
        }
        Decision::Allow
    }

    fn decide_manager_update(&self, vacation: &Vacation, previous: Option<&Vacation>) -> Decision {
        if vacation.status != VacationStatus::InProgress {
            return Decision::Deny(DenyReason::ImmutableStatus);
        }
        if vacation.special {
            return Decision::Deny(DenyReason::SpecialCategoryRequiresHr);
        }
        // A vacation whose start has already passed is no longer the
        // manager's to edit; `start_date == today` is still inside.
        if vacation.start_date < self.today {
            return Decision::Deny(DenyReason::OutsideEditableWindow);
        }
        if previous.is_some_and(|prev| prev.start_date < self.today) {
            return Decision::Deny(DenyReason::OutsideEditableWindow);
        }
        Decision::Allow
    }

    /// Employees may move the dates and swap the replacement; everything
    /// else belongs to the manager or HR.
    fn only_employee_fields_changed(candidate: &Vacation, previous: &Vacation) -> bool {
        candidate.employee_id == previous.employee_id
            && candidate.manager_id == previous.manager_id
            && candidate.status == previous.status
            && candidate.special == previous.special
    }
}

impl Default for VacationPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessPolicy for VacationPolicy {
    type Object = Vacation;

    fn evaluate(
        &self,
        subject: &Subject,
        operation: Operation,
        candidate: Option<&Vacation>,
        previous: Option<&Vacation>,
    ) -> Result<Decision, ResolverError> {
        Ok(self.decide(subject, operation, candidate, previous))
    }
}
