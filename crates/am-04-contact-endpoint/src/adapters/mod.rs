//! Adapters for the Submission Endpoint's outbound ports.

pub mod recaptcha;
pub mod smtp;

pub use recaptcha::RecaptchaVerifier;
pub use smtp::SmtpRelay;
