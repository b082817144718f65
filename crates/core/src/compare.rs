//! Metric-by-metric comparison of two macro profiles.

use serde::Serialize;

use crate::bmi::round_to_hundredths;
use crate::types::{Macros, Metric};

/// One row of a comparison: both values and their rounded difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricComparison {
    pub metric: Metric,
    pub a_value: f64,
    pub b_value: f64,
    /// `a_value - b_value`, rounded to two decimals.
    pub difference: f64,
}

/// Compare `a` against `b` over [`Metric::ALL`], in that order.
#[must_use]
pub fn compare(a: &Macros, b: &Macros) -> Vec<MetricComparison> {
    Metric::ALL
        .into_iter()
        .map(|metric| {
            let a_value = a.get(metric);
            let b_value = b.get(metric);
            MetricComparison {
                metric,
                a_value,
                b_value,
                difference: round_to_hundredths(a_value - b_value),
            }
        })
        .collect()
}
