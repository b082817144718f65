//! Food, product and comparison handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use nutrition_tracker_core::{Food, Metric, Product, ValidationError, compare};

use crate::error::Result;
use crate::extract::ApiQuery;
use crate::state::AppState;

/// Query of `GET /api/compare`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareQuery {
    pub food_id: Option<String>,
    pub product_id: Option<String>,
}

/// One comparison row on the wire: food value, product value, difference.
#[derive(Debug, Serialize)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub food: f64,
    pub product: f64,
    pub difference: f64,
}

/// Response of `GET /api/compare`.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub food: Food,
    pub product: Product,
    pub comparison: Vec<ComparisonRow>,
}

/// List foods.
pub async fn foods(State(state): State<AppState>) -> Json<Vec<Food>> {
    Json(state.catalog().foods().to_vec())
}

/// List products.
pub async fn products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().products().to_vec())
}

/// Compare one food against one product, metric by metric.
#[instrument(skip(state))]
pub async fn compare_items(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CompareQuery>,
) -> Result<Json<CompareResponse>> {
    let catalog = state.catalog();
    let food = query.food_id.as_deref().and_then(|id| catalog.find_food(id));
    let product = query
        .product_id
        .as_deref()
        .and_then(|id| catalog.find_product(id));

    let (Some(food), Some(product)) = (food, product) else {
        return Err(ValidationError::ComparisonSelection.into());
    };

    let comparison = compare(&food.macros, &product.macros)
        .into_iter()
        .map(|row| ComparisonRow {
            metric: row.metric,
            food: row.a_value,
            product: row.b_value,
            difference: row.difference,
        })
        .collect();

    Ok(Json(CompareResponse {
        food: food.clone(),
        product: product.clone(),
        comparison,
    }))
}
