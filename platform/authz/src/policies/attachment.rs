//! Attachment store access checks.
//!
//! Entitlement to the owning object (a poll, a vacation, ...) is judged by
//! that object's policy before a file operation reaches storage. This
//! checker gates what remains: unauthenticated external-share access, which
//! no operation tolerates unless the container opts in, and the upload size
//! limit, which is its own denial reason rather than a generic one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::decision::{Decision, DenyReason};
use crate::types::Subject;

/// Operations on an attachment store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentOperation {
    Select,
    Upload,
    Download,
    Update,
    Delete,
}

/// Addresses an attachment inside a container; carries no entity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentRef<'a> {
    pub container_path: &'a str,
    pub container_id: Uuid,
    pub file_id: Option<&'a str>,
    pub sub_path: Option<&'a str>,
}

impl<'a> AttachmentRef<'a> {
    pub fn container(container_path: &'a str, container_id: Uuid) -> Self {
        Self {
            container_path,
            container_id,
            file_id: None,
            sub_path: None,
        }
    }

    pub fn with_file_id(mut self, file_id: &'a str) -> Self {
        self.file_id = Some(file_id);
        self
    }

    pub fn with_sub_path(mut self, sub_path: &'a str) -> Self {
        self.sub_path = Some(sub_path);
        self
    }
}

/// Upload size gate, injected so callers can wire their own limits.
pub trait FileSizeChecker {
    fn max_file_size(&self) -> u64;

    fn check_size(&self, size: u64) -> Decision {
        if size > self.max_file_size() {
            Decision::Deny(DenyReason::FileTooLarge)
        } else {
            Decision::Allow
        }
    }
}

/// Fixed byte limit, optionally sourced from the environment.
#[derive(Debug, Clone, Copy)]
pub struct MaxFileSize {
    bytes: u64,
}

impl MaxFileSize {
    pub const DEFAULT_BYTES: u64 = 100 * 1024 * 1024;

    pub fn new(bytes: u64) -> Self {
        Self { bytes }
    }

    pub fn from_env() -> Self {
        let bytes = std::env::var("SUITE_MAX_ATTACHMENT_BYTES")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_BYTES);
        Self { bytes }
    }
}

impl Default for MaxFileSize {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BYTES)
    }
}

impl FileSizeChecker for MaxFileSize {
    fn max_file_size(&self) -> u64 {
        self.bytes
    }
}

/// Access checker for one attachment container.
pub struct AttachmentAccessChecker<S: FileSizeChecker> {
    size_checker: S,
    externally_shareable: bool,
    external_operations: HashSet<AttachmentOperation>,
}

impl<S: FileSizeChecker> AttachmentAccessChecker<S> {
    pub fn new(size_checker: S) -> Self {
        Self {
            size_checker,
            externally_shareable: false,
            external_operations: HashSet::new(),
        }
    }

    /// Marks the container externally shareable and allow-lists the given
    /// operations for subjects that are absent (external-share links).
    pub fn with_external_access(
        mut self,
        operations: impl IntoIterator<Item = AttachmentOperation>,
    ) -> Self {
        self.externally_shareable = true;
        self.external_operations.extend(operations);
        self
    }

    pub fn check_select(
        &self,
        subject: Option<&Subject>,
        attachment: &AttachmentRef<'_>,
    ) -> Decision {
        self.evaluate(subject, AttachmentOperation::Select, attachment)
    }

    pub fn check_upload(
        &self,
        subject: Option<&Subject>,
        attachment: &AttachmentRef<'_>,
        size: u64,
    ) -> Decision {
        match self.evaluate(subject, AttachmentOperation::Upload, attachment) {
            Decision::Allow => self.size_checker.check_size(size),
            deny => deny,
        }
    }

    pub fn check_download(
        &self,
        subject: Option<&Subject>,
        attachment: &AttachmentRef<'_>,
    ) -> Decision {
        self.evaluate(subject, AttachmentOperation::Download, attachment)
    }

    pub fn check_update(
        &self,
        subject: Option<&Subject>,
        attachment: &AttachmentRef<'_>,
    ) -> Decision {
        self.evaluate(subject, AttachmentOperation::Update, attachment)
    }

    pub fn check_delete(
        &self,
        subject: Option<&Subject>,
        attachment: &AttachmentRef<'_>,
    ) -> Decision {
        self.evaluate(subject, AttachmentOperation::Delete, attachment)
    }

    fn evaluate(
        &self,
        subject: Option<&Subject>,
        operation: AttachmentOperation,
        attachment: &AttachmentRef<'_>,
    ) -> Decision {
        let decision = if subject.is_none()
            && !(self.externally_shareable && self.external_operations.contains(&operation))
        {
            Decision::Deny(DenyReason::NotOwnerOrNoFullAccess)
        } else {
            Decision::Allow
        };
        debug!(
            container = attachment.container_path,
            container_id = %attachment.container_id,
            file_id = attachment.file_id,
            ?operation,
            anonymous = subject.is_none(),
            ?decision,
            "attachment access decision"
        );
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::UserId;

    fn attachment() -> AttachmentRef<'static> {
        AttachmentRef::container("vacation", Uuid::nil()).with_file_id("file-1")
    }

    #[test]
    fn absent_subject_is_denied_by_default() {
        let checker = AttachmentAccessChecker::new(MaxFileSize::default());
        let attachment = attachment();

        assert_eq!(
            checker.check_select(None, &attachment),
            Decision::Deny(DenyReason::NotOwnerOrNoFullAccess)
        );
        assert_eq!(
            checker.check_download(None, &attachment),
            Decision::Deny(DenyReason::NotOwnerOrNoFullAccess)
        );
        assert_eq!(
            checker.check_upload(None, &attachment, 1),
            Decision::Deny(DenyReason::NotOwnerOrNoFullAccess)
        );
    }

    #[test]
    fn external_share_allows_only_listed_operations() {
        let checker = AttachmentAccessChecker::new(MaxFileSize::default())
            .with_external_access([AttachmentOperation::Download]);
        let attachment = attachment();

        assert_eq!(checker.check_download(None, &attachment), Decision::Allow);
        assert_eq!(
            checker.check_delete(None, &attachment),
            Decision::Deny(DenyReason::NotOwnerOrNoFullAccess)
        );
    }

    #[test]
    fn authenticated_subject_passes_through() {
        let checker = AttachmentAccessChecker::new(MaxFileSize::default());
        let subject = Subject::new(UserId::random());
        let attachment = attachment();

        assert_eq!(
            checker.check_update(Some(&subject), &attachment),
            Decision::Allow
        );
    }

    #[test]
    fn oversized_upload_is_a_distinct_denial() {
        let checker = AttachmentAccessChecker::new(MaxFileSize::new(1024));
        let subject = Subject::new(UserId::random());
        let attachment = attachment();

        assert_eq!(
            checker.check_upload(Some(&subject), &attachment, 1024),
            Decision::Allow
        );
        assert_eq!(
            checker.check_upload(Some(&subject), &attachment, 1025),
            Decision::Deny(DenyReason::FileTooLarge)
        );
    }

    #[test]
    fn size_limit_reads_from_the_environment() {
        // No variable set: the default applies.
        let limit = MaxFileSize::from_env();
        assert_eq!(limit.max_file_size(), MaxFileSize::DEFAULT_BYTES);
    }
}
