//! CORS middleware.
//!
//! Wrapper around tower-http CORS with endpoint configuration.

use crate::domain::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer as TowerCorsLayer};

/// Create CORS layer from endpoint config
pub fn create_cors_layer(config: &CorsConfig) -> TowerCorsLayer {
    if !config.enabled {
        // Same-origin deployments: no CORS headers at all
        return TowerCorsLayer::new();
    }

    let mut cors = TowerCorsLayer::new();

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if config.allowed_headers.iter().any(|h| h == "*") {
        cors = cors.allow_headers(Any);
    } else {
        cors = cors.allow_headers(parse_headers(&config.allowed_headers));
    }

    if !config.expose_headers.is_empty() {
        cors = cors.expose_headers(parse_headers(&config.expose_headers));
    }

    cors.max_age(Duration::from_secs(config.max_age))
}

fn parse_headers(names: &[String]) -> Vec<HeaderName> {
    names.iter().filter_map(|h| h.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt;

    fn app(config: &CorsConfig) -> Router {
        Router::new()
            .route("/api/contact", post(|| async { "ok" }))
            .layer(create_cors_layer(config))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/contact")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_wildcard_origin() {
        let response = app(&CorsConfig::default())
            .oneshot(preflight("https://accuratemachinery.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_specific_origins() {
        let config = CorsConfig {
            allowed_origins: vec!["https://accuratemachinery.com".to_string()],
            ..CorsConfig::default()
        };

        let allowed = app(&config)
            .oneshot(preflight("https://accuratemachinery.com"))
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://accuratemachinery.com"
        );

        let denied = app(&config)
            .oneshot(preflight("https://elsewhere.example"))
            .await
            .unwrap();
        assert!(denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
