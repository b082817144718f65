//! Request extractors that report failures as [`AppError`].
//!
//! Axum's stock `Json` and `Query` extractors answer malformed input with a
//! plain-text body. Wrapping them keeps every error response in the
//! `{"message": ...}` shape.

use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

use nutrition_tracker_core::ValidationError;

use crate::error::AppError;

/// JSON body extractor with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// A numeric body field that clients may send as a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    /// Coerce an optional field to a number.
    ///
    /// `Ok(None)` means the field counts as missing: absent, `null`, a numeric
    /// zero or a blank string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMeasurement`] for text that is not a
    /// number.
    pub fn coerce(field: Option<&Self>) -> Result<Option<f64>, ValidationError> {
        match field {
            None => Ok(None),
            Some(Self::Number(n)) if *n == 0.0 => Ok(None),
            Some(Self::Number(n)) => Ok(Some(*n)),
            Some(Self::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse::<f64>()
                    .map(Some)
                    .map_err(|_| ValidationError::InvalidMeasurement)
            }
        }
    }
}
