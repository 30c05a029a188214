//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_action_repo;
pub mod admin_repo;
pub mod comment_repo;
pub mod media_repo;
pub mod notification_repo;
pub mod submission_repo;
pub mod user_repo;
pub mod validation_queue_repo;

pub use admin_action_repo::AdminActionRepo;
pub use admin_repo::AdminRepo;
pub use comment_repo::CommentRepo;
pub use media_repo::MediaRepo;
pub use notification_repo::NotificationRepo;
pub use submission_repo::SubmissionRepo;
pub use user_repo::UserRepo;
pub use validation_queue_repo::ValidationQueueRepo;
