//! Submission Client error types.
//!
//! `Display` of a [`SubmissionError`] is the text shown to the user.

use shared_types::messages;

/// Outcome of a failed submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// A required field is blank (no network call made)
    #[error("{}", messages::ALL_FIELDS_REQUIRED)]
    Validation,

    /// The bot-check provider is not ready or could not issue a token
    #[error("{}", messages::BOT_CHECK_NOT_READY)]
    ProviderUnavailable,

    /// The request never produced a response; detail is for logs only
    #[error("{}", messages::SEND_FAILED_NOTICE)]
    Network(String),

    /// 400 from the endpoint
    #[error("{0}")]
    ServerValidation(String),

    /// 403 from the endpoint
    #[error("{0}")]
    BotCheck(String),

    /// Any other non-success status
    #[error("{0}")]
    ServerFault(String),

    /// Another attempt from this client is still in flight
    #[error("a submission is already in progress")]
    AlreadySending,
}

impl SubmissionError {
    /// Whether this error corresponds to a submission attempt that the user
    /// is told about.
    pub fn is_reported(&self) -> bool {
        !matches!(self, SubmissionError::AlreadySending)
    }
}

/// Bot-check token provider failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("bot-check provider not ready")]
    NotReady,
    #[error("token request failed: {0}")]
    Failed(String),
}

/// Transport failures (no HTTP response obtained).
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("client setup failed: {0}")]
    Client(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("reading response body failed: {0}")]
    Body(String),
}
