//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`, and every error response has the body
//! `{"message": "<human-readable text>"}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use nutrition_tracker_core::ValidationError;

use crate::store::StoreError;

/// Client message for a JSON body that cannot be decoded.
pub const INVALID_BODY: &str = "Invalid request body.";

/// Client message for a query string that cannot be decoded.
pub const INVALID_QUERY: &str = "Invalid query string.";

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed a domain validation check.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Request body or query could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    /// The standard "unknown customer" error.
    #[must_use]
    pub fn customer_not_found() -> Self {
        Self::NotFound("Customer not found.".to_string())
    }

    /// HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::BadRequest(msg) | Self::NotFound(msg) => msg.clone(),
            // Don't expose internal error details to clients
            Self::Store(_) => "Internal server error".to_string(),
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Store(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorBody {
            message: self.client_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // Deserializer detail stays in the logs
        tracing::debug!(detail = %rejection.body_text(), "JSON body rejected");
        Self::BadRequest(INVALID_BODY.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "Query string rejected");
        Self::BadRequest(INVALID_QUERY.to_string())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
