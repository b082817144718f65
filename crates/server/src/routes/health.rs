//! Liveness and readiness probes.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the document store can be read and parsed.
/// Returns 503 Service Unavailable otherwise.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().read_all().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
