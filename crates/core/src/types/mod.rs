//! Core types for the nutrition tracker.
//!
//! This module provides the persisted customer document and the read-only
//! nutrition catalog shapes.

pub mod customer;
pub mod document;
pub mod id;
pub mod metric;
pub mod nutrition;
pub mod timestamp;

pub use customer::{BmiEntry, Customer, NewCustomer, NoteEntry};
pub use document::Document;
pub use id::*;
pub use metric::Metric;
pub use nutrition::{CatalogItem, Food, Macros, Product};
