//! Domain attribute records for the suite's access policies.
//!
//! These are plain data shapes: everything a policy needs to know about an
//! object is an explicit field, pre-loaded by the caller. Persistence and
//! serialization live elsewhere.

mod ids;
mod poll;
mod vacation;

pub use ids::{GroupId, UserId};
pub use poll::{Poll, PollState};
pub use vacation::{Vacation, VacationStatus};
