//! Typed failures returned by the rental engine.
//!
//! Every precondition violation is an expected outcome reported to the
//! caller as a value; the engine never panics or aborts on them.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgencyError {
    /// A vehicle or customer with this id is already registered.
    #[error("duplicate id: {id}")]
    DuplicateId { id: String },

    #[error("vehicle not found: {id}")]
    VehicleNotFound { id: String },

    #[error("customer not found: {id}")]
    CustomerNotFound { id: String },

    #[error("rental not found: {id}")]
    RentalNotFound { id: String },

    /// The vehicle exists but is currently rented out.
    #[error("vehicle {id} is not available for rent")]
    VehicleUnavailable { id: String },

    /// A field failed validation (empty required field, non-positive
    /// rate, non-positive day count).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The end date is not strictly after the start date.
    #[error("invalid date range: end {end} must be after start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The requested lifecycle transition is not permitted from the
    /// current state.
    #[error("invalid state transition: {message}")]
    InvalidStateTransition { message: String },
}

impl AgencyError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        AgencyError::InvalidArgument { message: message.into() }
    }

    pub(crate) fn invalid_transition(message: impl Into<String>) -> Self {
        AgencyError::InvalidStateTransition { message: message.into() }
    }
}
