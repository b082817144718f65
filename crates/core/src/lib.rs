//! Nutrition Tracker Core - Domain types and pure operations.
//!
//! This crate provides the types shared by every nutrition tracker component:
//! - `server` - JSON API and document store
//! - `integration-tests` - Black-box tests against the API
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no file
//! access, no HTTP. Timestamps are passed in by the caller so every operation
//! here is deterministic.
//!
//! # Modules
//!
//! - [`types`] - Customers, history entries, the persisted document and catalog items
//! - [`bmi`] - Body-mass-index calculation and rounding
//! - [`compare`] - Per-metric comparison of two macro profiles
//! - [`validation`] - Boundary validation errors with client-facing messages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bmi;
pub mod compare;
pub mod types;
pub mod validation;

pub use bmi::{calculate_bmi, round_to_hundredths};
pub use compare::{MetricComparison, compare};
pub use types::*;
pub use validation::ValidationError;
