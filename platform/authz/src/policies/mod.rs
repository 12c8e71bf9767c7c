//! Per-entity access policies.

pub mod attachment;
pub mod poll;
pub mod vacation;

pub use attachment::{
    AttachmentAccessChecker, AttachmentOperation, AttachmentRef, FileSizeChecker, MaxFileSize,
};
pub use poll::PollPolicy;
pub use vacation::VacationPolicy;
