//! Fixed message text.
//!
//! Endpoint strings are externally observable API text; clients match on
//! them, so they must not drift.

// Endpoint responses
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const MISSING_BOT_CHECK_TOKEN: &str = "Missing reCAPTCHA token";
pub const BOT_CHECK_FAILED: &str = "reCAPTCHA verification failed";
pub const SEND_FAILED: &str = "Failed to send message";

// Client notifications
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const BOT_CHECK_NOT_READY: &str = "reCAPTCHA not ready.";
pub const SEND_FAILED_NOTICE: &str = "Failed to send message.";
pub const MESSAGE_SENT: &str = "Message sent successfully.";
