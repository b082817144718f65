//! The persisted document root.

use serde::{Deserialize, Serialize};

use super::{Customer, CustomerId};

/// Everything the store persists: `{"customers": [...]}`.
///
/// Customers are kept in creation order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub customers: Vec<Customer>,
}

impl Document {
    /// Find a customer by ID (linear scan).
    #[must_use]
    pub fn find_customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.id == id)
    }

    /// Mutable variant of [`Self::find_customer`].
    pub fn find_customer_mut(&mut self, id: &CustomerId) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| &c.id == id)
    }

    /// Whether any customer already uses `id`.
    #[must_use]
    pub fn contains_customer(&self, id: &CustomerId) -> bool {
        self.find_customer(id).is_some()
    }
}
