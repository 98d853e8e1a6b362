//! # Contact Submission Wire Types
//!
//! Request body and response bodies of `POST /api/contact`.
//!
//! | Status | Body |
//! |--------|------|
//! | 200 | `{"ok": true}` |
//! | 400 | `{"error": "Missing required fields"}` / `{"error": "Missing reCAPTCHA token"}` |
//! | 403 | `{"error": "reCAPTCHA verification failed"}` |
//! | 500 | `{"error": "Failed to send message"}` |

use serde::{Deserialize, Deserializer, Serialize};

/// One contact form submission.
///
/// Every field is a string and defaults to empty when absent or `null` in
/// the request body, so "absent" and "empty" are the same condition for the
/// endpoint's required-field checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    /// Always starts with `+` when produced by the form controller
    #[serde(deserialize_with = "null_as_empty")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub topic: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
    /// Bot-check token obtained by the client for the `contact_form` action
    #[serde(rename = "recaptchaToken", deserialize_with = "null_as_empty")]
    pub bot_check_token: String,
}

impl ContactSubmission {
    /// True when the bot-check token is absent or blank.
    pub fn missing_token(&self) -> bool {
        self.bot_check_token.trim().is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Success body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub ok: bool,
}

impl SubmissionAck {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Error body. `error` is the only field a client may show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
