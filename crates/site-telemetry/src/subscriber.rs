//! Global subscriber installation.

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Held for the lifetime of the process.
#[derive(Debug)]
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}

/// Parse the configured filter directives.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter {
        directives: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let filter = build_filter(&config)?;
    let install = |e: tracing_subscriber::util::TryInitError| TelemetryError::Install(e.to_string());

    match (config.console_output, config.json_logs) {
        (false, _) => tracing_subscriber::registry()
            .with(filter)
            .try_init()
            .map_err(install)?,
        (true, true) => {
            // JSON output for containers/production
            let json_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_current_span(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
                .map_err(install)?
        }
        (true, false) => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(install)?
        }
    }

    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        filter = %config.log_level,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_directives() {
        let config = TelemetryConfig {
            log_level: "info,am_04_contact_endpoint=debug".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_filter_rejects_garbage() {
        let config = TelemetryConfig {
            log_level: "info,am_04_contact_endpoint=loudest".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(matches!(
            build_filter(&config),
            Err(TelemetryError::Filter { .. })
        ));
    }

    #[test]
    fn test_second_install_fails() {
        let config = TelemetryConfig {
            console_output: false,
            ..TelemetryConfig::default()
        };
        let _first = init_telemetry(config.clone());
        assert!(matches!(
            init_telemetry(config),
            Err(TelemetryError::Install(_))
        ));
    }
}
