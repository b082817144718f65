//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::store::DocumentStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// document store and the read-only catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: DocumentStore,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: DocumentStore, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, catalog }),
        }
    }

    /// Get a reference to the customer document store.
    #[must_use]
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }

    /// Get a reference to the food/product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
