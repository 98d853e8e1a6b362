//! Endpoint configuration with validation.
//!
//! Every section is `Default`-able; the runtime overrides fields from the
//! environment and then calls [`EndpointConfig::validate`].

use serde::Deserialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Default reCAPTCHA v3 verification URL.
pub const DEFAULT_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Default sender display name.
pub const DEFAULT_FROM_NAME: &str = "Accurate Machinery";

/// Main endpoint configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub http: HttpConfig,
    pub cors: CorsConfig,
    pub limits: LimitsConfig,
    pub timeouts: TimeoutConfig,
    pub bot_check: BotCheckConfig,
    pub mail: MailConfig,
}

impl EndpointConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_check.secret.is_empty() {
            return Err(ConfigError::Missing("bot_check.secret"));
        }
        if self.bot_check.verify_url.trim().is_empty() {
            return Err(ConfigError::Missing("bot_check.verify_url"));
        }
        let score = self.bot_check.min_score;
        if !(0.0..=1.0).contains(&score) {
            return Err(ConfigError::InvalidScore(score));
        }

        if self.mail.host.trim().is_empty() {
            return Err(ConfigError::Missing("mail.host"));
        }
        if self.mail.from_address.trim().is_empty() {
            return Err(ConfigError::Missing("mail.from_address"));
        }
        if self.mail.to_address.trim().is_empty() {
            return Err(ConfigError::Missing("mail.to_address"));
        }

        if self.limits.max_body_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_body_size cannot be 0".into(),
            ));
        }

        if self.timeouts.request.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "request timeout cannot be 0".into(),
            ));
        }
        if self.mail.timeout.is_zero() || self.bot_check.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "outbound timeouts cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: IpAddr,
    /// Port (default: 3000)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub expose_headers: Vec<String>,
    /// Max age for preflight cache, in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["Content-Type".to_string()],
            expose_headers: vec!["x-request-id".to_string()],
            max_age: 86400, // 24 hours
        }
    }
}

/// Request limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Max request body size in bytes (default: 64KiB)
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024,
        }
    }
}

/// Timeout configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request budget, pipeline included
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(30),
        }
    }
}

/// Bot-check verification settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotCheckConfig {
    pub secret: Secret,
    pub verify_url: String,
    /// Scores strictly below this are rejected
    pub min_score: f64,
    pub timeout: Duration,
}

impl Default for BotCheckConfig {
    fn default() -> Self {
        Self {
            secret: Secret::default(),
            verify_url: DEFAULT_VERIFY_URL.to_string(),
            min_score: 0.5,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Outbound mail settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub host: String,
    /// Port (default: 587)
    pub port: u16,
    /// Implicit TLS when true, opportunistic STARTTLS otherwise
    pub secure: bool,
    pub credentials: Option<MailCredentials>,
    pub from_address: String,
    pub from_name: String,
    pub to_address: String,
    pub timeout: Duration,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 587,
            secure: false,
            credentials: None,
            from_address: String::new(),
            from_name: DEFAULT_FROM_NAME.to_string(),
            to_address: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// SMTP login
#[derive(Debug, Clone, Deserialize)]
pub struct MailCredentials {
    pub username: String,
    pub password: Secret,
}

/// A credential that never appears in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    #[error("minimum bot-check score must be within [0, 1], got {0}")]
    InvalidScore(f64),

    #[error("invalid limit: {0}")]
    InvalidLimit(String),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
