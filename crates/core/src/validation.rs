//! Boundary validation errors.
//!
//! Each variant's `Display` text is the exact message returned to API
//! clients, so keep them short and human-readable.

/// Errors raised when a request's input fails a presence or shape check.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Customer name is missing or blank.
    #[error("Name is required.")]
    NameRequired,
    /// Height or weight is missing, empty or zero.
    #[error("Height (cm) and weight (kg) are required.")]
    MeasurementsRequired,
    /// Height or weight is present but not a positive finite number.
    #[error("Height (cm) and weight (kg) must be positive numbers.")]
    InvalidMeasurement,
    /// Both note and recommendation are empty.
    #[error("Provide a note or recommendation.")]
    NoteRequired,
    /// Comparison request did not resolve to one food and one product.
    #[error("Please select one food and one product.")]
    ComparisonSelection,
}
