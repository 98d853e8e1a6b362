//! Domain types for the Submission Client.

pub mod error;

pub use error::{ProviderError, SubmissionError, TransportError};
