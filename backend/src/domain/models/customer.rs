//! Domain model for a registered customer.

use serde::{Deserialize, Serialize};

/// A customer in the agency's registry.
///
/// `rental_history` holds rental ids only, in creation order; entries are
/// appended by the agency when a rental is created and never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub rental_history: Vec<String>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Append a rental id to the customer's history.
    pub(crate) fn record_rental(&mut self, rental_id: String) {
        self.rental_history.push(rental_id);
    }
}
