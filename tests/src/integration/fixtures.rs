//! # Shared Fixtures
//!
//! Test doubles for the endpoint's outbound ports and a transport that
//! drives the endpoint router in process.

use am_03_submission_client::{ContactTransport, SubmissionClient, TransportError, TransportResponse};
use am_04_contact_endpoint::{
    BotCheckVerifier, ContactEndpointService, EndpointConfig, MailEnvelope, MailRelay, RelayError,
    Secret, VerificationResult, VerifierError,
};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::Router;
use parking_lot::Mutex;
use shared_types::{ContactSubmission, CONTACT_PATH};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

// =============================================================================
// ENDPOINT DOUBLES
// =============================================================================

/// Verifier answering every token with a fixed score.
pub struct FixedScoreVerifier {
    score: f64,
    calls: AtomicUsize,
}

impl FixedScoreVerifier {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BotCheckVerifier for FixedScoreVerifier {
    async fn verify(&self, _token: &str) -> Result<VerificationResult, VerifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(VerificationResult::new(true, self.score))
    }
}

/// Relay that records envelopes, or refuses them all.
#[derive(Default)]
pub struct RecordingRelay {
    refuse: bool,
    sent: Mutex<Vec<MailEnvelope>>,
}

impl RecordingRelay {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<MailEnvelope> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl MailRelay for RecordingRelay {
    async fn send(&self, envelope: MailEnvelope) -> Result<(), RelayError> {
        if self.refuse {
            return Err(RelayError::Rejected("554 relay access denied".into()));
        }
        self.sent.lock().push(envelope);
        Ok(())
    }
}

// =============================================================================
// IN-PROCESS TRANSPORT
// =============================================================================

/// Submission transport that calls the endpoint router directly.
pub struct RouterTransport {
    router: Router,
}

impl RouterTransport {
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

#[async_trait]
impl ContactTransport for RouterTransport {
    async fn post(&self, submission: &ContactSubmission) -> Result<TransportResponse, TransportError> {
        let body = serde_json::to_vec(submission).map_err(|e| TransportError::Request(e.to_string()))?;
        let request = Request::builder()
            .method(Method::POST)
            .uri(CONTACT_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(TransportResponse::new(status, bytes.to_vec()))
    }
}

// =============================================================================
// BUILDERS
// =============================================================================

/// A complete endpoint configuration pointing at nothing real.
pub fn endpoint_config() -> EndpointConfig {
    let mut config = EndpointConfig::default();
    config.bot_check.secret = Secret::new("server-secret");
    config.mail.host = "smtp.invalid".into();
    config.mail.from_address = "noreply@accuratemachinery.com".into();
    config.mail.to_address = "sales@accuratemachinery.com".into();
    config
}

/// Endpoint service built on the given doubles.
pub fn endpoint(
    verifier: Arc<FixedScoreVerifier>,
    relay: Arc<RecordingRelay>,
) -> Result<ContactEndpointService, am_04_contact_endpoint::EndpointError> {
    ContactEndpointService::new(endpoint_config(), verifier, relay)
}

/// Fill every field the way a visitor would, untrimmed.
pub fn fill_form(client: &SubmissionClient) {
    client.edit(|form| {
        form.set_first_name("Ada ");
        form.set_last_name(" Lovelace");
        form.set_country_code("44");
        form.set_phone("2071234567");
        form.set_email("ada@example.com");
        form.set_topic("Quote");
        form.set_message("Forty brackets, powder coated.");
    });
}
