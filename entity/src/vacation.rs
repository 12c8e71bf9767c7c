use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationStatus {
    InProgress,
    Approved,
    Rejected,
}

/// Access-relevant attributes of a vacation request.
///
/// `start_date <= end_date` is validated upstream; policies only read the
/// fields. A `special` vacation needs HR rather than line-manager approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacation {
    pub employee_id: UserId,
    pub manager_id: UserId,
    pub replacement_id: UserId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: VacationStatus,
    pub special: bool,
}

impl Vacation {
    pub fn new(
        employee: UserId,
        manager: UserId,
        replacement: UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            employee_id: employee,
            manager_id: manager,
            replacement_id: replacement,
            start_date,
            end_date,
            status: VacationStatus::InProgress,
            special: false,
        }
    }

    pub fn with_status(mut self, status: VacationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_special(mut self, special: bool) -> Self {
        self.special = special;
        self
    }

    pub fn with_dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }
}
