//! Domain types for the Submission Endpoint.

pub mod config;
pub mod correlation;
pub mod envelope;
pub mod error;
pub mod stage;

pub use config::{
    BotCheckConfig, ConfigError, CorsConfig, EndpointConfig, HttpConfig, LimitsConfig, MailConfig,
    MailCredentials, Secret, TimeoutConfig,
};
pub use correlation::RequestId;
pub use envelope::{MailEnvelope, MailRouting};
pub use error::{ContactError, EndpointError};
pub use stage::PipelineStage;
