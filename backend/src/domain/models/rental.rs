//! Domain model for a rental transaction and its lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::AgencyError;
use crate::domain::models::vehicle::Vehicle;

/// Lifecycle status of a rental transaction.
///
/// Transitions are one-directional: `Active` may move to `Completed` or
/// `Cancelled`; nothing leaves `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    Active,
    Completed,
    Cancelled,
}

impl RentalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RentalStatus::Active => "Active",
            RentalStatus::Completed => "Completed",
            RentalStatus::Cancelled => "Cancelled",
        }
    }
}

/// A rental transaction linking one customer and one vehicle for a date
/// range.
///
/// Holds ids only; the agency resolves them against its own collections.
/// Construction never touches vehicle availability — that mutation
/// belongs to the agency so a failed construction has nothing to roll
/// back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: String,
    pub customer_id: String,
    pub vehicle_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whole calendar days between start and end, always >= 1.
    pub days: i64,
    /// daily_rate * days, recomputed whenever the end date changes.
    pub total_cost: f64,
    pub status: RentalStatus,
}

impl Rental {
    /// Build a new `Active` rental, validating the date range and pricing
    /// it against the vehicle's daily rate.
    pub(crate) fn new(
        id: &str,
        customer_id: &str,
        vehicle: &Vehicle,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, AgencyError> {
        let days = whole_days_between(start_date, end_date)?;
        let total_cost = vehicle.rental_cost(days)?;
        Ok(Rental {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            vehicle_id: vehicle.id.clone(),
            start_date,
            end_date,
            days,
            total_cost,
            status: RentalStatus::Active,
        })
    }

    /// Transition `Active` -> `Completed`.
    pub(crate) fn complete(&mut self) -> Result<(), AgencyError> {
        if self.status != RentalStatus::Active {
            return Err(AgencyError::invalid_transition(format!(
                "only active rentals can be completed, {} is {}",
                self.id,
                self.status.label()
            )));
        }
        self.status = RentalStatus::Completed;
        Ok(())
    }

    /// Transition to `Cancelled`.
    ///
    /// Accepted on an already-`Cancelled` rental (a repeat cancellation
    /// stays `Cancelled`); only `Completed` blocks it.
    pub(crate) fn cancel(&mut self) -> Result<(), AgencyError> {
        if self.status == RentalStatus::Completed {
            return Err(AgencyError::invalid_transition(format!(
                "completed rental {} cannot be cancelled",
                self.id
            )));
        }
        self.status = RentalStatus::Cancelled;
        Ok(())
    }

    /// Move the end date, revalidating the range and recomputing days and
    /// total cost against the vehicle's rate.
    pub(crate) fn set_end_date(
        &mut self,
        vehicle: &Vehicle,
        end_date: NaiveDate,
    ) -> Result<(), AgencyError> {
        let days = whole_days_between(self.start_date, end_date)?;
        let total_cost = vehicle.rental_cost(days)?;
        self.end_date = end_date;
        self.days = days;
        self.total_cost = total_cost;
        Ok(())
    }
}

/// Whole-calendar-day span between two dates; the span must be positive.
fn whole_days_between(start: NaiveDate, end: NaiveDate) -> Result<i64, AgencyError> {
    let days = (end - start).num_days();
    if days <= 0 {
        return Err(AgencyError::InvalidDateRange { start, end });
    }
    Ok(days)
}
