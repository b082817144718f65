//! Correlation IDs for requests.
//!
//! A caller-supplied `x-request-id` is reused when it looks like an
//! identifier: 1 to 128 visible ASCII characters. Anything else is replaced
//! by a fresh UUID v4. The ID ends up on the request span, the Sentry scope,
//! the request extensions and the response headers.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_LEN: usize = 128;

/// Request ID attached to each request's extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(HeaderValue);

impl RequestId {
    /// Reuse the incoming header if it is acceptable, otherwise generate one.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(REQUEST_ID_HEADER)
            .filter(|value| is_acceptable(value))
            .map_or_else(Self::generate, |value| Self(value.clone()))
    }

    fn generate() -> Self {
        let id = Uuid::new_v4().hyphenated().to_string();
        // A hyphenated UUID is always a valid header value
        Self(HeaderValue::from_str(&id).unwrap_or_else(|_| HeaderValue::from_static("unknown")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or_default()
    }
}

fn is_acceptable(value: &HeaderValue) -> bool {
    let bytes = value.as_bytes();
    (1..=MAX_LEN).contains(&bytes.len()) && bytes.iter().all(u8::is_ascii_graphic)
}

/// Assign a [`RequestId`] and echo it back in the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let id = RequestId::from_headers(request.headers());

    Span::current().record("request_id", id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", id.as_str()));

    request.extensions_mut().insert(id.clone());
    let mut response = next.run(request).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, id.0);
    response
}
