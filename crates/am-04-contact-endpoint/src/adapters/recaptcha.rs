//! reCAPTCHA v3 verifier over HTTPS.

use crate::domain::{BotCheckConfig, Secret};
use crate::ports::{BotCheckVerifier, VerificationResult, VerifierError};
use async_trait::async_trait;
use tracing::debug;

/// Posts `secret` and `response` form-encoded to the verify URL.
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    verify_url: String,
    secret: Secret,
}

impl RecaptchaVerifier {
    pub fn new(config: &BotCheckConfig) -> Result<Self, VerifierError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| VerifierError::Client(e.to_string()))?;
        Ok(Self {
            client,
            verify_url: config.verify_url.clone(),
            secret: config.secret.clone(),
        })
    }

    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }
}

#[async_trait]
impl BotCheckVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> Result<VerificationResult, VerifierError> {
        let response = self
            .client
            .post(&self.verify_url)
            .form(&[("secret", self.secret.expose()), ("response", token)])
            .send()
            .await
            .map_err(|e| VerifierError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| VerifierError::Request(e.to_string()))?;

        let result = response
            .json::<VerificationResult>()
            .await
            .map_err(|e| VerifierError::Decode(e.to_string()))?;

        debug!(success = result.success, score = result.score, "Bot-check verified");
        Ok(result)
    }
}
