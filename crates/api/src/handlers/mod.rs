//! Request handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod notification;
pub mod preview;
pub mod submission;
pub mod validation_queue;
