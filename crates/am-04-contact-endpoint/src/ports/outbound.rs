//! Outbound (Driven) ports: bot-check verification and mail relay.

use crate::domain::MailEnvelope;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Verification service answer for one token.
///
/// Only `success` and `score` drive the decision. The remaining fields are
/// kept for the rejection log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    #[serde(default)]
    pub success: bool,
    /// Missing score counts as 0.0, so an answer without one never passes
    /// a positive threshold.
    #[serde(default)]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, rename = "error-codes", skip_serializing_if = "Vec::is_empty")]
    pub error_codes: Vec<String>,
}

impl VerificationResult {
    pub fn new(success: bool, score: f64) -> Self {
        Self {
            success,
            score,
            action: None,
            hostname: None,
            error_codes: Vec::new(),
        }
    }

    /// True iff the provider succeeded and the score reaches `min_score`.
    /// A non-finite score never passes.
    pub fn passes(&self, min_score: f64) -> bool {
        self.success && self.score.is_finite() && self.score >= min_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifierError {
    #[error("verification client setup failed: {0}")]
    Client(String),
    #[error("verification request failed: {0}")]
    Request(String),
    #[error("verification response unreadable: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// The envelope could not be turned into a message
    #[error("invalid message: {0}")]
    Compose(String),
    #[error("relay connection failed: {0}")]
    Connection(String),
    /// The relay answered but refused the message
    #[error("relay rejected message: {0}")]
    Rejected(String),
}

/// Bot-check verification service.
#[async_trait]
pub trait BotCheckVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerificationResult, VerifierError>;
}

/// Outbound mail relay.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, envelope: MailEnvelope) -> Result<(), RelayError>;
}
