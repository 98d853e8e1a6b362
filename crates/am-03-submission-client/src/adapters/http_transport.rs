//! HTTP transport for contact submissions (reqwest).

use crate::domain::TransportError;
use crate::ports::{ContactTransport, TransportResponse};
use async_trait::async_trait;
use shared_types::{ContactSubmission, CONTACT_PATH};
use std::time::Duration;
use tracing::debug;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// POSTs submissions as JSON to `{base_url}/api/contact`.
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint_url(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn post(&self, submission: &ContactSubmission) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        debug!(status, endpoint = %self.endpoint, "Contact endpoint responded");
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH)
}
