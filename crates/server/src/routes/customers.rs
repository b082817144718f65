//! Customer route handlers.
//!
//! Each mutation runs as one read-modify-write cycle through
//! [`DocumentStore::update`](crate::store::DocumentStore::update): validation
//! happens before the store is touched, and a missing customer aborts the
//! cycle without writing.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, SubsecRound, Utc};
use serde::Deserialize;
use tracing::instrument;

use nutrition_tracker_core::{
    BmiEntry, Customer, CustomerId, NewCustomer, NoteEntry, ValidationError,
};

use crate::error::{AppError, Result};
use crate::extract::{ApiJson, LooseNumber};
use crate::state::AppState;

/// Body of `POST /api/customers`.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of `POST /api/customers/{id}/bmi`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBmiRequest {
    pub height_cm: Option<LooseNumber>,
    pub weight_kg: Option<LooseNumber>,
}

/// Body of `POST /api/customers/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    pub note: Option<String>,
    pub recommendation: Option<String>,
}

/// Server-assigned entry timestamp, at millisecond precision.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// List all customers in creation order.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    let doc = state.store().read_all().await?;
    Ok(Json(doc.customers))
}

/// Create a customer.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>)> {
    let details = NewCustomer::parse(body.name.as_deref(), body.email.as_deref())?;
    let created_at = Utc::now();

    let customer = state
        .store()
        .update(|doc| {
            let id = CustomerId::generate(created_at, |candidate| doc.contains_customer(candidate));
            let customer = Customer::new(id, details);
            doc.customers.push(customer.clone());
            Ok::<_, AppError>(customer)
        })
        .await?;

    tracing::info!(customer_id = %customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Fetch one customer.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>> {
    let id = CustomerId::new(id);
    let doc = state.store().read_all().await?;

    doc.find_customer(&id)
        .cloned()
        .map(Json)
        .ok_or_else(AppError::customer_not_found)
}

/// Append a BMI measurement to a customer's history.
#[instrument(skip(state, body))]
pub async fn add_bmi(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<AddBmiRequest>,
) -> Result<Json<BmiEntry>> {
    let height_cm = LooseNumber::coerce(body.height_cm.as_ref())?;
    let weight_kg = LooseNumber::coerce(body.weight_kg.as_ref())?;
    let (Some(height_cm), Some(weight_kg)) = (height_cm, weight_kg) else {
        return Err(ValidationError::MeasurementsRequired.into());
    };
    let entry = BmiEntry::record(height_cm, weight_kg, now())?;

    let id = CustomerId::new(id);
    state
        .store()
        .update(|doc| {
            let customer = doc
                .find_customer_mut(&id)
                .ok_or_else(AppError::customer_not_found)?;
            customer.bmi_history.push(entry.clone());
            Ok::<_, AppError>(())
        })
        .await?;

    tracing::info!(customer_id = %id, bmi = entry.bmi, "BMI entry recorded");
    Ok(Json(entry))
}

/// Append a note and/or recommendation to a customer.
#[instrument(skip(state, body))]
pub async fn add_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<AddNoteRequest>,
) -> Result<Json<NoteEntry>> {
    let entry = NoteEntry::record(body.note.as_deref(), body.recommendation.as_deref(), now())?;

    let id = CustomerId::new(id);
    state
        .store()
        .update(|doc| {
            let customer = doc
                .find_customer_mut(&id)
                .ok_or_else(AppError::customer_not_found)?;
            customer.notes.push(entry.clone());
            Ok::<_, AppError>(())
        })
        .await?;

    tracing::info!(customer_id = %id, "Note recorded");
    Ok(Json(entry))
}
