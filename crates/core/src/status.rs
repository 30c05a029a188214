//! Submission status and file-type constants, plus the status-transition
//! graph enforced by the lifecycle handlers.
//!
//! These must match the values stored in the `submissions.status` and
//! `submissions.file_type` columns.

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_SUBMITTED: &str = "submitted";
pub const STATUS_VALIDATED: &str = "validated";
pub const STATUS_REJECTED: &str = "rejected";

pub const FILE_IMAGE: &str = "image";
pub const FILE_AUDIO: &str = "audio";
pub const FILE_VIDEO: &str = "video";
pub const FILE_DOCUMENT: &str = "document";

pub fn is_valid_status(status: &str) -> bool {
    matches!(
        status,
        STATUS_PENDING | STATUS_SUBMITTED | STATUS_VALIDATED | STATUS_REJECTED
    )
}

pub fn is_valid_file_type(file_type: &str) -> bool {
    matches!(file_type, FILE_IMAGE | FILE_AUDIO | FILE_VIDEO | FILE_DOCUMENT)
}

/// Whether a submission may move from `from` to `to`.
///
/// The graph is `pending -> submitted -> {validated, rejected}`, with two
/// deliberate loosenings:
///
/// - Re-asserting the current status is always allowed (idempotent no-op),
///   so a second `submit` on an already-submitted item succeeds.
/// - Review decisions are accepted directly from `pending`, so admins can
///   act on items whose owner never pressed submit.
///
/// Crossing between the terminal states (`validated` <-> `rejected`) is not
/// allowed.
pub fn can_transition(from: &str, to: &str) -> bool {
    if from == to {
        return true;
    }
    match (from, to) {
        (STATUS_PENDING, STATUS_SUBMITTED) => true,
        (STATUS_PENDING | STATUS_SUBMITTED, STATUS_VALIDATED | STATUS_REJECTED) => true,
        _ => false,
    }
}
