//! Submission Endpoint service - HTTP entry point.
//!
//! Serves `POST /api/contact` and `GET /health`.

use crate::domain::{ContactError, EndpointConfig, EndpointError, MailRouting};
use crate::middleware::{create_cors_layer, TimeoutLayer, TracingLayer};
use crate::pipeline::ContactPipeline;
use crate::ports::{BotCheckVerifier, MailRelay};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use shared_types::{SubmissionAck, CONTACT_PATH};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::{info, warn};

/// Submission Endpoint service state
pub struct ContactEndpointService {
    config: EndpointConfig,
    pipeline: Arc<ContactPipeline>,
}

impl ContactEndpointService {
    /// Create a new endpoint service
    pub fn new(
        config: EndpointConfig,
        verifier: Arc<dyn BotCheckVerifier>,
        relay: Arc<dyn MailRelay>,
    ) -> Result<Self, EndpointError> {
        config.validate()?;

        let pipeline = Arc::new(ContactPipeline::new(
            verifier,
            relay,
            MailRouting::from(&config.mail),
            config.bot_check.min_score,
        ));

        Ok(Self { config, pipeline })
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn start(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), EndpointError> {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| EndpointError::Bind { addr, source })?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), EndpointError> {
        let addr = listener.local_addr().map_err(EndpointError::Serve)?;
        info!(%addr, "Contact endpoint listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(EndpointError::Serve)?;

        info!("Contact endpoint stopped");
        Ok(())
    }

    /// Build the HTTP router with its middleware stack
    pub fn router(&self) -> Router {
        let state = AppState {
            pipeline: Arc::clone(&self.pipeline),
        };

        let middleware = ServiceBuilder::new()
            .layer(TracingLayer::new())
            .layer(create_cors_layer(&self.config.cors))
            .layer(TimeoutLayer::new(&self.config.timeouts));

        Router::new()
            .route(CONTACT_PATH, post(handle_contact))
            .route("/health", get(health_check))
            .layer(DefaultBodyLimit::max(self.config.limits.max_body_size))
            .layer(middleware)
            .with_state(state)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    pipeline: Arc<ContactPipeline>,
}

/// Handle a contact submission
async fn handle_contact(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let outcome = match body {
        Ok(bytes) => state.pipeline.process(&bytes).await,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Unreadable request body");
            Err(ContactError::MalformedBody(rejection.body_text()))
        }
    };

    match outcome {
        Ok(()) => Json(SubmissionAck::ok()).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "contact-endpoint",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
