//! Notification kind constants and the standard review-outcome message.
//!
//! Kinds must match the values stored in the `notifications.kind` column.

use crate::status::{STATUS_REJECTED, STATUS_VALIDATED};

pub const KIND_SUCCESS: &str = "success";
pub const KIND_ERROR: &str = "error";
pub const KIND_INFO: &str = "info";
pub const KIND_WARNING: &str = "warning";

pub fn is_valid_kind(kind: &str) -> bool {
    matches!(kind, KIND_SUCCESS | KIND_ERROR | KIND_INFO | KIND_WARNING)
}

/// Kind, title, and message for the standard "your submission was
/// {validated|rejected}" notification sent after a review decision.
///
/// Returns `None` for statuses that do not notify the owner.
pub fn review_notification(
    status: &str,
    file_name: &str,
    rejection_reason: Option<&str>,
) -> Option<(&'static str, String, String)> {
    match status {
        STATUS_VALIDATED => Some((
            KIND_SUCCESS,
            "Submission validated".to_string(),
            format!("Your submission \"{file_name}\" has been validated."),
        )),
        STATUS_REJECTED => {
            let message = match rejection_reason {
                Some(reason) => format!(
                    "Your submission \"{file_name}\" has been rejected. Reason: {reason}"
                ),
                None => format!("Your submission \"{file_name}\" has been rejected."),
            };
            Some((KIND_ERROR, "Submission rejected".to_string(), message))
        }
        _ => None,
    }
}
