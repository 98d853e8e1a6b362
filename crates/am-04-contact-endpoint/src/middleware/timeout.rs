//! Timeout middleware.
//!
//! A request that exceeds its budget gets the generic failure body.

use crate::domain::config::TimeoutConfig;
use crate::domain::ContactError;
use axum::{body::Body, http::Request, response::IntoResponse, response::Response};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::timeout;
use tower::{Layer, Service};
use tracing::warn;

/// Timeout layer
#[derive(Clone)]
pub struct TimeoutLayer {
    budget: Duration,
}

impl TimeoutLayer {
    pub fn new(config: &TimeoutConfig) -> Self {
        Self {
            budget: config.request,
        }
    }
}

impl<S> Layer<S> for TimeoutLayer {
    type Service = TimeoutService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TimeoutService {
            inner,
            budget: self.budget,
        }
    }
}

/// Timeout service
#[derive(Clone)]
pub struct TimeoutService<S> {
    inner: S,
    budget: Duration,
}

impl<S> Service<Request<Body>> for TimeoutService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let budget = self.budget;
        let mut inner = self.inner.clone();

        Box::pin(async move {
            match timeout(budget, inner.call(req)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(timeout_ms = budget.as_millis() as u64, "Request timed out");
                    Ok(ContactError::Internal(format!(
                        "request exceeded {}ms",
                        budget.as_millis()
                    ))
                    .into_response())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt;

    fn app(handler_delay: Duration) -> Router {
        Router::new()
            .route(
                "/slow",
                post(move || async move {
                    tokio::time::sleep(handler_delay).await;
                    "done"
                }),
            )
            .layer(TimeoutLayer::new(&TimeoutConfig {
                request: Duration::from_secs(30),
            }))
    }

    fn request() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/slow")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_request_passes_through() {
        let response = app(Duration::from_secs(1)).oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_request_gets_generic_failure() {
        let response = app(Duration::from_secs(31)).oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"error":"Failed to send message"}"#);
    }
}
