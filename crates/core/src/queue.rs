//! Well-known validation-queue entry status constants.
//!
//! These must match the values stored in the `validation_queue.status`
//! column.

pub const QUEUE_PENDING: &str = "pending";
pub const QUEUE_IN_PROGRESS: &str = "in_progress";
pub const QUEUE_COMPLETED: &str = "completed";
pub const QUEUE_CANCELLED: &str = "cancelled";

pub fn is_valid_queue_status(status: &str) -> bool {
    matches!(
        status,
        QUEUE_PENDING | QUEUE_IN_PROGRESS | QUEUE_COMPLETED | QUEUE_CANCELLED
    )
}
