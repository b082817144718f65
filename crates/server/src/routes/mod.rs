//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (store readable)
//!
//! # Customers
//! GET  /api/customers               - List customers
//! POST /api/customers               - Create customer
//! GET  /api/customers/{id}          - Customer detail
//! POST /api/customers/{id}/bmi      - Append BMI entry
//! POST /api/customers/{id}/notes    - Append note entry
//!
//! # Nutrition
//! GET  /api/foods                   - Food catalog
//! GET  /api/products                - Product catalog
//! GET  /api/compare?foodId=&productId= - Food vs product comparison
//! ```

pub mod customers;
pub mod health;
pub mod nutrition;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(customers::list).post(customers::create))
        .route("/{id}", get(customers::show))
        .route("/{id}/bmi", post(customers::add_bmi))
        .route("/{id}/notes", post(customers::add_note))
}

/// Create the `/api` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customer_routes())
        .route("/foods", get(nutrition::foods))
        .route("/products", get(nutrition::products))
        .route("/compare", get(nutrition::compare_items))
}

/// Create all application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
}
