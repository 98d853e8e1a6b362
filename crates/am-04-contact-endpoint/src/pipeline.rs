//! Per-request contact pipeline.
//!
//! Stateless across requests. Each call walks
//! `received → validated → bot-checked → mail-dispatched → responded`
//! and stops at the first failure.

use crate::domain::{ContactError, MailEnvelope, MailRouting, PipelineStage};
use crate::ports::{BotCheckVerifier, MailRelay, RelayError};
use shared_types::ContactSubmission;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct ContactPipeline {
    verifier: Arc<dyn BotCheckVerifier>,
    relay: Arc<dyn MailRelay>,
    routing: MailRouting,
    min_score: f64,
}

impl ContactPipeline {
    pub fn new(
        verifier: Arc<dyn BotCheckVerifier>,
        relay: Arc<dyn MailRelay>,
        routing: MailRouting,
        min_score: f64,
    ) -> Self {
        Self {
            verifier,
            relay,
            routing,
            min_score,
        }
    }

    /// Process one raw request body.
    pub async fn process(&self, body: &[u8]) -> Result<(), ContactError> {
        let mut stage = PipelineStage::Received;
        let outcome = self.run(body, &mut stage).await;

        match &outcome {
            Ok(()) => debug!(stage = %PipelineStage::Responded, "Contact request handled"),
            Err(e) => report(stage, e),
        }
        outcome
    }

    async fn run(&self, body: &[u8], stage: &mut PipelineStage) -> Result<(), ContactError> {
        let submission: ContactSubmission = serde_json::from_slice(body)
            .map_err(|e| ContactError::MalformedBody(e.to_string()))?;

        if submission.email.trim().is_empty() || submission.message.trim().is_empty() {
            return Err(ContactError::MissingFields);
        }
        if submission.missing_token() {
            return Err(ContactError::MissingBotCheckToken);
        }
        *stage = PipelineStage::Validated;

        let verification = self
            .verifier
            .verify(submission.bot_check_token.trim())
            .await
            .map_err(|e| ContactError::Verification(e.to_string()))?;
        if !verification.passes(self.min_score) {
            warn!(
                ?verification,
                min_score = self.min_score,
                "Bot-check rejected submission"
            );
            return Err(ContactError::BotCheckRejected {
                success: verification.success,
                score: verification.score,
            });
        }
        *stage = PipelineStage::BotChecked;

        let envelope = MailEnvelope::compose(&submission, &self.routing);
        self.relay.send(envelope).await.map_err(|e| match e {
            RelayError::Compose(detail) => ContactError::MailCompose(detail),
            other => ContactError::MailDispatch(other.to_string()),
        })?;
        *stage = PipelineStage::MailDispatched;

        info!(stage = %stage, score = verification.score, "Contact mail dispatched");
        Ok(())
    }
}

fn report(stage: PipelineStage, e: &ContactError) {
    let status = e.status().as_u16();
    if e.is_client_error() {
        warn!(%stage, status, error = %e, "Contact request refused");
    } else {
        error!(%stage, status, error = %e, "Contact request failed");
    }
}
