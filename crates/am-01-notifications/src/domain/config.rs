//! Notification Center configuration.

use std::time::Duration;

/// Default time a notification stays visible.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Configuration for a [`NotificationCenter`](crate::NotificationCenter).
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// How long a notification lives before it is removed automatically
    pub display_duration: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_duration: DEFAULT_DISPLAY_DURATION,
        }
    }
}

impl NotificationConfig {
    pub fn with_display_duration(display_duration: Duration) -> Self {
        Self { display_duration }
    }
}
