//! Notifications module - push notification inbox.

mod notifications_model;
mod notifications_service;

// Re-export the public interface
pub use notifications_model::{NotificationListResult, NotificationMessage};
pub use notifications_service::NotificationService;
