//! ISP Console dashboard library.
//!
//! The dashboard is a thin, authenticated HTTP front for the ISP backend:
//! it proxies list reads with the signed-in user's token, then filters,
//! sorts, summarises and exports them with `isp-console-core`.
//!
//! The router is built here so integration tests can drive it with any
//! [`backend::IspBackend`] implementation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod backend;
pub mod components;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Level;

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Build the complete application router: probes, API routes, sessions and
/// request tracing.
pub fn build_router(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/health/ready", get(routes::health::readiness))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::api::IspApiClient;
    use crate::config::{DashboardConfig, IspApiConfig};

    /// A router whose backend is unreachable.
    fn app() -> Router {
        let api = IspApiConfig::for_base_url("http://127.0.0.1:9/api").unwrap();
        let client = IspApiClient::new(&api).unwrap();
        let config = DashboardConfig {
            host: [127, 0, 0, 1].into(),
            port: 0,
            base_url: "http://localhost".to_string(),
            api,
            json_logs: false,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 0.0,
            sentry_traces_sample_rate: 0.0,
            tls: None,
        };
        build_router(AppState::new(config, Arc::new(client)))
    }

    async fn status_of(uri: &str) -> StatusCode {
        app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_needs_no_backend() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_reports_unreachable_backend() {
        assert_eq!(
            status_of("/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_api_requires_session() {
        assert_eq!(status_of("/api/customers").await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_of("/api/complaints/CMP-1").await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(status_of("/api/routers").await, StatusCode::NOT_FOUND);
    }
}
