//! Nutrition Tracker server library.
//!
//! This crate provides the API server as a library, allowing it to be tested
//! in-process and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

use std::path::Path;
use std::time::Duration;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use state::AppState;

/// Build the full application router.
///
/// When `public_dir` is given, unmatched paths fall back to static files
/// from that directory (the browser client).
pub fn build_router(state: AppState, public_dir: Option<&Path>) -> Router {
    let mut router = routes::routes();

    if let Some(dir) = public_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
