//! AM-04 Submission Endpoint - server side of the contact form.
//!
//! # Architecture
//!
//! ```text
//! POST /api/contact
//!        │
//!  ┌─────┴──────────────────────────────────────────┐
//!  │ Middleware: Tracing → CORS → Timeout → Limit   │
//!  └─────┬──────────────────────────────────────────┘
//!        │
//!  ┌─────┴──────────────────────────────────────────┐
//!  │ ContactPipeline                                │
//!  │ received → validated → bot-checked →           │
//!  │ mail-dispatched → responded                    │
//!  └─────┬───────────────────────────┬──────────────┘
//!        │ BotCheckVerifier          │ MailRelay
//!        ▼                           ▼
//!  RecaptchaVerifier (reqwest)   SmtpRelay (lettre)
//! ```
//!
//! # Responses
//!
//! | Status | Cause |
//! |--------|-------|
//! | 200 | Mail handed to the relay |
//! | 400 | Email or message empty, or bot-check token missing |
//! | 403 | Bot-check failed or scored below the threshold |
//! | 500 | Anything else; detail is logged, never returned |
//!
//! # Usage
//!
//! ```ignore
//! use am_04_contact_endpoint::{ContactEndpointService, EndpointConfig, RecaptchaVerifier, SmtpRelay};
//!
//! let verifier = Arc::new(RecaptchaVerifier::new(&config.bot_check)?);
//! let relay = Arc::new(SmtpRelay::new(config.mail.clone()));
//! let service = ContactEndpointService::new(config, verifier, relay)?;
//! service.start(shutdown_signal()).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod middleware;
pub mod pipeline;
pub mod ports;
pub mod service;

pub use adapters::{RecaptchaVerifier, SmtpRelay};
pub use domain::{
    BotCheckConfig, ConfigError, ContactError, CorsConfig, EndpointConfig, EndpointError,
    HttpConfig, LimitsConfig, MailConfig, MailCredentials, MailEnvelope, MailRouting,
    PipelineStage, RequestId, Secret, TimeoutConfig,
};
pub use pipeline::ContactPipeline;
pub use ports::{BotCheckVerifier, MailRelay, RelayError, VerificationResult, VerifierError};
pub use service::ContactEndpointService;
