//! Request tracing middleware.
//!
//! One `contact_request` span per request, keyed by a [`RequestId`] that is
//! echoed back in the `x-request-id` header.

use crate::domain::correlation::{RequestId, REQUEST_ID_HEADER};
use axum::{body::Body, http::HeaderValue, http::Request, response::Response};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{info, info_span, Instrument, Span};

/// Tracing layer that creates spans for each request
#[derive(Clone, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

/// Tracing service
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for TracingService<S>
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
        let mut inner = self.inner.clone();

        let request_id = RequestId::from_headers(req.headers());
        let span = info_span!(
            "contact_request",
            request_id = %request_id,
            http.method = %req.method(),
            http.target = %req.uri().path(),
            status = tracing::field::Empty,
        );

        Box::pin(
            async move {
                let mut response = inner.call(req).await?;

                let status = response.status();
                Span::current().record("status", status.as_u16());
                info!(status = status.as_u16(), "Request completed");

                if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                    response.headers_mut().insert(REQUEST_ID_HEADER, value);
                }
                Ok(response)
            }
            .instrument(span),
        )
    }
}
