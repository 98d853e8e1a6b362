//! Ports for the Submission Endpoint.

pub mod outbound;

pub use outbound::{BotCheckVerifier, MailRelay, RelayError, VerificationResult, VerifierError};
