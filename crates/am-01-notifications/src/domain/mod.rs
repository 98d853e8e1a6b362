//! Domain types for the Notification Center.

pub mod config;
pub mod entities;

pub use config::NotificationConfig;
pub use entities::{Notification, NotificationId};
