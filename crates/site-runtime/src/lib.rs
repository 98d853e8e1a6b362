//! # Site Runtime Library
//!
//! Environment loading for the contact endpoint, exposed for testing. The
//! entry point is the `main.rs` binary.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CONTACT_HOST` | `0.0.0.0` |
//! | `CONTACT_PORT` | `3000` |
//! | `CONTACT_ALLOWED_ORIGINS` | `*` (comma separated) |
//! | `CONTACT_REQUEST_TIMEOUT_SECS` | `30` |
//! | `RECAPTCHA_SECRET_KEY` | required |
//! | `RECAPTCHA_VERIFY_URL` | Google siteverify |
//! | `RECAPTCHA_MIN_SCORE` | `0.5` |
//! | `SMTP_HOST` | required |
//! | `SMTP_PORT` | `587` |
//! | `SMTP_SECURE` | `false`; only the literal `true` enables implicit TLS |
//! | `SMTP_USER` / `SMTP_PASS` | no authentication |
//! | `SMTP_FROM` | required |
//! | `SMTP_FROM_NAME` | `Accurate Machinery` |
//! | `CONTACT_TO` | required |

use am_04_contact_endpoint::{ConfigError, EndpointConfig, MailCredentials, Secret};
use std::str::FromStr;
use std::time::Duration;

/// Load the endpoint configuration from process environment variables.
pub fn load_config() -> Result<EndpointConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load the endpoint configuration from an arbitrary variable source.
///
/// Unset variables keep their defaults; the result is validated.
pub fn load_config_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<EndpointConfig, ConfigError> {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut config = EndpointConfig::default();

    if let Some(host) = var("CONTACT_HOST") {
        config.http.host = parse("CONTACT_HOST", &host)?;
    }
    if let Some(port) = var("CONTACT_PORT") {
        config.http.port = parse("CONTACT_PORT", &port)?;
    }
    if let Some(origins) = var("CONTACT_ALLOWED_ORIGINS") {
        config.cors.allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(secs) = var("CONTACT_REQUEST_TIMEOUT_SECS") {
        config.timeouts.request =
            Duration::from_secs(parse("CONTACT_REQUEST_TIMEOUT_SECS", &secs)?);
    }

    if let Some(secret) = var("RECAPTCHA_SECRET_KEY") {
        config.bot_check.secret = Secret::new(secret);
    }
    if let Some(url) = var("RECAPTCHA_VERIFY_URL") {
        config.bot_check.verify_url = url;
    }
    if let Some(score) = var("RECAPTCHA_MIN_SCORE") {
        config.bot_check.min_score = parse("RECAPTCHA_MIN_SCORE", &score)?;
    }

    if let Some(host) = var("SMTP_HOST") {
        config.mail.host = host;
    }
    if let Some(port) = var("SMTP_PORT") {
        config.mail.port = parse("SMTP_PORT", &port)?;
    }
    config.mail.secure = var("SMTP_SECURE").as_deref() == Some("true");
    config.mail.credentials = match (var("SMTP_USER"), var("SMTP_PASS")) {
        (Some(username), Some(password)) => Some(MailCredentials {
            username,
            password: Secret::new(password),
        }),
        (None, None) => None,
        (Some(_), None) => return Err(ConfigError::Missing("SMTP_PASS")),
        (None, Some(_)) => return Err(ConfigError::Missing("SMTP_USER")),
    };
    if let Some(from) = var("SMTP_FROM") {
        config.mail.from_address = from;
    }
    if let Some(name) = var("SMTP_FROM_NAME") {
        config.mail.from_name = name;
    }
    if let Some(to) = var("CONTACT_TO") {
        config.mail.to_address = to;
    }

    config.validate()?;
    Ok(config)
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
