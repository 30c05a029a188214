//! Well-known role, account-status, and author-type constants.
//!
//! These must match the values stored in the `admins.role`,
//! `admins.account_status`, and `comments.author_type` columns.

/// Full administrative access, including admin account management.
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// May review submissions (validate/reject) and manage their own queue.
pub const ROLE_VALIDATOR_ADMIN: &str = "validator_admin";

pub const ACCOUNT_ACTIVE: &str = "active";
pub const ACCOUNT_PENDING: &str = "pending";
pub const ACCOUNT_SUSPENDED: &str = "suspended";

/// Comment written by a regular contributor.
pub const AUTHOR_USER: &str = "user";

/// Comment written by an administrator.
pub const AUTHOR_ADMIN: &str = "admin";

pub fn is_valid_admin_role(role: &str) -> bool {
    role == ROLE_SUPER_ADMIN || role == ROLE_VALIDATOR_ADMIN
}

pub fn is_valid_account_status(status: &str) -> bool {
    matches!(status, ACCOUNT_ACTIVE | ACCOUNT_PENDING | ACCOUNT_SUSPENDED)
}

pub fn is_valid_author_type(author_type: &str) -> bool {
    author_type == AUTHOR_USER || author_type == AUTHOR_ADMIN
}
