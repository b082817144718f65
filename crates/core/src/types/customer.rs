//! Customers and their append-only history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CustomerId;
use crate::bmi::{calculate_bmi, round_to_hundredths};
use crate::validation::ValidationError;

/// A tracked customer.
///
/// `bmi_history` and `notes` are append-only and ordered by insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bmi_history: Vec<BmiEntry>,
    #[serde(default)]
    pub notes: Vec<NoteEntry>,
}

impl Customer {
    /// Create a customer with empty histories.
    #[must_use]
    pub fn new(id: CustomerId, details: NewCustomer) -> Self {
        Self {
            id,
            name: details.name,
            email: details.email,
            bmi_history: Vec::new(),
            notes: Vec::new(),
        }
    }
}

/// Validated input for creating a [`Customer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    name: String,
    email: String,
}

impl NewCustomer {
    /// Trim and validate raw name/email input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameRequired`] if the name is missing or blank.
    pub fn parse(name: Option<&str>, email: Option<&str>) -> Result<Self, ValidationError> {
        let name = name.map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.map(str::trim).unwrap_or_default().to_owned(),
        })
    }
}

/// A single height/weight measurement with its computed BMI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiEntry {
    #[serde(with = "super::timestamp")]
    pub date: DateTime<Utc>,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Rounded to two decimals.
    pub bmi: f64,
}

impl BmiEntry {
    /// Record a measurement taken at `date`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMeasurement`] unless both values are
    /// finite and strictly positive.
    pub fn record(
        height_cm: f64,
        weight_kg: f64,
        date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(height_cm) || !valid(weight_kg) {
            return Err(ValidationError::InvalidMeasurement);
        }

        Ok(Self {
            date,
            height_cm,
            weight_kg,
            bmi: round_to_hundredths(calculate_bmi(height_cm, weight_kg)),
        })
    }
}

/// A free-text note and/or recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    #[serde(with = "super::timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub recommendation: String,
}

impl NoteEntry {
    /// Build a note entry from optional, untrimmed input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoteRequired`] if both fields are empty
    /// after trimming.
    pub fn record(
        note: Option<&str>,
        recommendation: Option<&str>,
        date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let note = note.map(str::trim).unwrap_or_default();
        let recommendation = recommendation.map(str::trim).unwrap_or_default();
        if note.is_empty() && recommendation.is_empty() {
            return Err(ValidationError::NoteRequired);
        }

        Ok(Self {
            date,
            note: note.to_owned(),
            recommendation: recommendation.to_owned(),
        })
    }
}
