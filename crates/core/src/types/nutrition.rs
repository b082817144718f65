//! Catalog items: foods and products with a macro-nutrient profile.

use serde::{Deserialize, Serialize};

use super::{CatalogItemId, Metric};

/// Macro-nutrient values per serving.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl Macros {
    /// Value of a single metric.
    #[must_use]
    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Calories => self.calories,
            Metric::Protein => self.protein,
            Metric::Carbs => self.carbs,
            Metric::Fat => self.fat,
            Metric::Fiber => self.fiber,
        }
    }
}

/// A named reference item with a macro profile.
///
/// Serializes flat: `{id, name, calories, protein, carbs, fat, fiber}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    #[serde(flatten)]
    pub macros: Macros,
}

impl CatalogItem {
    #[must_use]
    pub fn new(id: &str, name: &str, macros: Macros) -> Self {
        Self {
            id: CatalogItemId::new(id),
            name: name.to_owned(),
            macros,
        }
    }
}

/// A whole food (apple, broccoli, ...).
pub type Food = CatalogItem;

/// A packaged supplement or product.
pub type Product = CatalogItem;
