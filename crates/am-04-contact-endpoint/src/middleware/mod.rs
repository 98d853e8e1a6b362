//! Middleware stack for the Submission Endpoint.
//!
//! Layer order: Request → Tracing → CORS → Timeout → BodyLimit → Handler

pub mod cors;
pub mod timeout;
pub mod tracing;

pub use cors::create_cors_layer;
pub use timeout::TimeoutLayer;
pub use tracing::TracingLayer;
