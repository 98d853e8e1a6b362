//! Outbound (Driven) ports for the Submission Client.
//!
//! Both collaborators are injected so tests can substitute doubles.

use crate::domain::{ProviderError, TransportError};
use async_trait::async_trait;
use shared_types::ContactSubmission;

/// Source of bot-check tokens (reCAPTCHA v3 in the browser).
#[async_trait]
pub trait BotCheckProvider: Send + Sync {
    /// Whether the provider has loaded and can issue tokens.
    fn is_ready(&self) -> bool;

    /// Obtain a token scoped to `action`.
    async fn token(&self, action: &str) -> Result<String, ProviderError>;
}

/// Raw HTTP response from the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivery of a submission to the contact endpoint.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn post(&self, submission: &ContactSubmission) -> Result<TransportResponse, TransportError>;
}
