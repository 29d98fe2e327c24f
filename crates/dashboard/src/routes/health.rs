//! Liveness and readiness probes.

use axum::{extract::State, http::StatusCode};
use secrecy::ExposeSecret;

use crate::state::AppState;

/// Liveness probe - returns 200 if the server is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness probe - returns 200 if the ISP backend answers.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    let token = state
        .config()
        .api
        .service_token
        .as_ref()
        .map(ExposeSecret::expose_secret);

    match state.backend().ping(token).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "ISP backend not reachable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
