//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity is
//!   patchable

pub mod admin;
pub mod admin_action;
pub mod comment;
pub mod media;
pub mod notification;
pub mod submission;
pub mod user;
pub mod validation_queue;
