//! # Contact Endpoint Runtime
//!
//! ## Startup Sequence
//!
//! 1. Install telemetry (from `AM_*` variables)
//! 2. Load and validate configuration from the environment
//! 3. Build the reCAPTCHA verifier and SMTP relay
//! 4. Serve until Ctrl+C or SIGTERM, then drain in-flight requests

use std::sync::Arc;

use am_04_contact_endpoint::{ContactEndpointService, RecaptchaVerifier, SmtpRelay};
use anyhow::{Context, Result};
use site_telemetry::{init_telemetry, TelemetryConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("failed to initialize telemetry")?;

    let config = site_runtime::load_config().context("invalid contact endpoint configuration")?;
    info!(
        addr = %config.http_addr(),
        smtp_host = %config.mail.host,
        smtp_port = config.mail.port,
        smtp_secure = config.mail.secure,
        min_score = config.bot_check.min_score,
        "Configuration loaded"
    );

    let verifier = Arc::new(
        RecaptchaVerifier::new(&config.bot_check).context("failed to build bot-check client")?,
    );
    let relay = Arc::new(SmtpRelay::new(config.mail.clone()));

    let service = ContactEndpointService::new(config, verifier, relay)
        .context("failed to create contact endpoint")?;

    if let Err(e) = service.start(shutdown_signal()).await {
        error!(error = %e, "Contact endpoint terminated");
        return Err(e).context("contact endpoint failed");
    }

    info!("Shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
