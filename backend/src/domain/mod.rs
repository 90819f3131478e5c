//! Domain layer: models, commands, errors, and the agency aggregate.

pub mod agency;
pub mod commands;
pub mod errors;
pub mod models;

pub use agency::RentalAgency;
pub use errors::AgencyError;
pub use models::rental::{Rental, RentalStatus};
pub use models::report::RevenueReport;
pub use models::customer::Customer;
pub use models::vehicle::Vehicle;
