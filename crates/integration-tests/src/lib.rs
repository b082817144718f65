//! Integration tests for the nutrition tracker.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process API tests (no server needed)
//! cargo test -p nutrition-tracker-integration-tests
//!
//! # Live smoke tests against a running server
//! NUTRITION_BASE_URL=http://localhost:3000 \
//!     cargo test -p nutrition-tracker-integration-tests -- --ignored
//! ```
//!
//! [`TestContext`] drives the real router in-process with
//! `tower::ServiceExt::oneshot`, backed by a document store in a fresh
//! temporary directory.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use nutrition_tracker_core::Document;
use nutrition_tracker_server::{
    build_router, catalog::Catalog, state::AppState, store::DocumentStore,
};

/// A router wired to an isolated on-disk store.
pub struct TestContext {
    router: Router,
    data_file: PathBuf,
    _dir: TempDir,
}

/// Status and parsed JSON body of a response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestContext {
    /// Fresh context with an empty document and the built-in catalog.
    pub async fn new() -> Self {
        Self::with_document(None).await
    }

    /// Context whose store starts from `doc`.
    pub async fn with_document(doc: Option<&Document>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("data.json");
        if let Some(doc) = doc {
            std::fs::write(&data_file, serde_json::to_string_pretty(doc).unwrap()).unwrap();
        }

        let store = DocumentStore::open(&data_file).await.unwrap();
        let state = AppState::new(store, Catalog::builtin());

        Self {
            router: build_router(state, None),
            data_file,
            _dir: dir,
        }
    }

    /// Path of the backing JSON file.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Raw text of the backing JSON file.
    #[must_use]
    pub fn raw_document(&self) -> String {
        std::fs::read_to_string(&self.data_file).unwrap()
    }

    /// Parsed backing document.
    #[must_use]
    pub fn document(&self) -> Document {
        serde_json::from_str(&self.raw_document()).unwrap()
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    /// POST an arbitrary (possibly malformed) JSON payload.
    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    /// Create a customer and return its ID.
    pub async fn create_customer(&self, name: &str) -> String {
        let resp = self
            .post_json("/api/customers", &serde_json::json!({ "name": name }))
            .await;
        assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);
        resp.body["id"].as_str().unwrap().to_string()
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }
}
