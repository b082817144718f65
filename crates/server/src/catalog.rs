//! Read-only nutrition reference tables.
//!
//! The catalog is built once at startup and handed to handlers through
//! [`AppState`](crate::state::AppState). It is never mutated afterwards.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use nutrition_tracker_core::{Food, Macros, Product};

/// Errors loading a catalog override file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {} is not valid: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Foods and products available for comparison.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    foods: Vec<Food>,
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub const fn new(foods: Vec<Food>, products: Vec<Product>) -> Self {
        Self { foods, products }
    }

    /// The built-in reference tables.
    #[must_use]
    pub fn builtin() -> Self {
        let foods = vec![
            Food::new("food-apple", "Apple", macros(95.0, 0.5, 25.0, 0.3, 4.4)),
            Food::new("food-broccoli", "Broccoli", macros(55.0, 3.7, 11.2, 0.6, 5.1)),
            Food::new("food-banana", "Banana", macros(105.0, 1.3, 27.0, 0.4, 3.1)),
        ];
        let products = vec![
            Product::new(
                "product-multivitamin",
                "Daily Multivitamin",
                macros(5.0, 0.0, 1.0, 0.0, 0.0),
            ),
            Product::new(
                "product-protein-powder",
                "Whey Protein Scoop",
                macros(120.0, 24.0, 3.0, 2.0, 0.0),
            ),
            Product::new(
                "product-omega-3",
                "Omega-3 Softgel",
                macros(10.0, 0.0, 0.0, 1.0, 0.0),
            ),
        ];

        Self::new(foods, products)
    }

    /// Load a catalog from a JSON file shaped `{"foods": [...], "products": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn find_food(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|f| f.id.as_str() == id)
    }

    #[must_use]
    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn macros(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Macros {
    Macros {
        calories,
        protein,
        carbs,
        fat,
        fiber,
    }
}
