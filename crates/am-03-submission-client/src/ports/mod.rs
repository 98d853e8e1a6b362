//! Ports for the Submission Client.

pub mod outbound;

pub use outbound::{BotCheckProvider, ContactTransport, TransportResponse};
