//! Body-mass-index arithmetic.

/// Calculate BMI as `weight_kg / (height_cm / 100)^2`.
///
/// The result is not rounded; rounding happens when a [`BmiEntry`] is built.
///
/// [`BmiEntry`]: crate::BmiEntry
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round the exact binary value to two decimal places.
///
/// A value only sits exactly halfway between two hundredths when it is a
/// multiple of 1/8; those round away from zero. Everything else rounds to the
/// nearest hundredth of its exact decimal expansion.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    if (value * 8.0).fract() == 0.0 {
        // Scaling a multiple of 1/8 by 100 is exact
        return (value * 100.0).round() / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}
