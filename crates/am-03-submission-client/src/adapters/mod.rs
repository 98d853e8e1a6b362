//! Adapters for the Submission Client.
//!
//! Infrastructure implementations of the outbound ports.

pub mod http_transport;
pub mod static_token;

pub use http_transport::HttpContactTransport;
pub use static_token::StaticTokenProvider;
