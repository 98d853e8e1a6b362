//! Submission Endpoint error types.
//!
//! Callers only ever see one of four bodies. Internal detail stays in the
//! `Display` output, which goes to the logs.

use crate::domain::config::ConfigError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_types::{messages, ErrorBody};
use std::net::SocketAddr;

/// Failure of one contact request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactError {
    /// Body missing, oversized or not a contact submission
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("email or message is empty")]
    MissingFields,

    #[error("bot-check token is missing")]
    MissingBotCheckToken,

    #[error("bot-check rejected (success={success}, score={score})")]
    BotCheckRejected { success: bool, score: f64 },

    /// The verification service could not be consulted
    #[error("bot-check verification failed: {0}")]
    Verification(String),

    #[error("mail composition failed: {0}")]
    MailCompose(String),

    #[error("mail dispatch failed: {0}")]
    MailDispatch(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::MissingFields | ContactError::MissingBotCheckToken => {
                StatusCode::BAD_REQUEST
            }
            ContactError::BotCheckRejected { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The only text a caller receives.
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::MissingFields => messages::MISSING_REQUIRED_FIELDS,
            ContactError::MissingBotCheckToken => messages::MISSING_BOT_CHECK_TOKEN,
            ContactError::BotCheckRejected { .. } => messages::BOT_CHECK_FAILED,
            _ => messages::SEND_FAILED,
        }
    }

    /// Whether the failure lies with the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

/// Endpoint service lifecycle errors
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("server bind error on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
