//! # Site Telemetry
//!
//! Structured logging for the contact services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use site_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AM_SERVICE_NAME` | `contact-endpoint` | Service name on every event |
//! | `AM_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directives |
//! | `AM_JSON_LOGS` | `false` (`true` in containers) | JSON lines instead of text |
//! | `AM_CONSOLE_OUTPUT` | `true` | Disable to silence stdout |

mod config;
mod subscriber;

pub use config::TelemetryConfig;
pub use subscriber::{build_filter, init_telemetry, TelemetryGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter {directives:?}: {reason}")]
    Filter { directives: String, reason: String },

    #[error("failed to install global subscriber: {0}")]
    Install(String),
}
