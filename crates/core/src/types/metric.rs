//! Nutrient metrics used for comparison.

use serde::{Deserialize, Serialize};

/// A single macro-nutrient attribute shared by foods and products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
}

impl Metric {
    /// Every metric, in the fixed order comparisons are reported.
    pub const ALL: [Self; 5] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::Fiber,
    ];

    /// Wire name of the metric.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::Fiber => "fiber",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
