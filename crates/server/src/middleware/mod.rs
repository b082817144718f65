//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (one span per request)
//! 3. Request ID (add unique ID to each request)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
