//! Aggregated agency figures.

use serde::{Deserialize, Serialize};

/// Counts and revenue across the whole agency at a point in time.
///
/// Revenue counts completed rentals only; active and cancelled rentals
/// contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub fleet_size: usize,
    pub available_vehicles: usize,
    pub customer_count: usize,
    pub total_rentals: usize,
    pub active_rentals: usize,
    pub completed_rentals: usize,
    pub total_revenue: f64,
}
