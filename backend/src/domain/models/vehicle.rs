//! Domain model for a fleet vehicle.

use serde::{Deserialize, Serialize};

use crate::domain::errors::AgencyError;

/// A vehicle in the agency's fleet.
///
/// Availability is flipped only by the rent/return transitions below; the
/// agency is the only caller of those transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub daily_rate: f64,
    /// Free-form category label, compared case-insensitively.
    pub category: String,
    pub available: bool,
}

impl Vehicle {
    /// Rental cost for the given number of whole days.
    pub fn rental_cost(&self, days: i64) -> Result<f64, AgencyError> {
        if days <= 0 {
            return Err(AgencyError::invalid_argument(format!(
                "rental days must be greater than 0, got {days}"
            )));
        }
        Ok(self.daily_rate * days as f64)
    }

    /// Mark the vehicle as rented out.
    pub fn rent_out(&mut self) -> Result<(), AgencyError> {
        if !self.available {
            return Err(AgencyError::invalid_transition(format!(
                "vehicle {} is already rented",
                self.id
            )));
        }
        self.available = false;
        Ok(())
    }

    /// Mark the vehicle as returned to the fleet.
    pub fn return_to_fleet(&mut self) -> Result<(), AgencyError> {
        if self.available {
            return Err(AgencyError::invalid_transition(format!(
                "vehicle {} is already available",
                self.id
            )));
        }
        self.available = true;
        Ok(())
    }

    /// Case-insensitive category match used by fleet queries.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}
