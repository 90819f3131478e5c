use serde::{Deserialize, Serialize};

/// Snapshot of a fleet vehicle as shown to frontends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDto {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    /// Rental price per calendar day
    pub daily_rate: f64,
    /// Free-form category label (Economy, Standard, Luxury, SUV, ...)
    pub category: String,
    /// Human-readable availability label ("Available" / "Rented")
    pub status: String,
}

/// Snapshot of a registered customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    /// Number of rentals ever created for this customer
    pub total_rentals: usize,
}

/// Snapshot of a rental transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalDto {
    pub id: String,
    pub customer_id: String,
    pub vehicle_id: String,
    /// Start of the rental period (YYYY-MM-DD)
    pub start_date: String,
    /// End of the rental period (YYYY-MM-DD)
    pub end_date: String,
    pub days: i64,
    pub total_cost: f64,
    /// Lifecycle status label ("Active" / "Completed" / "Cancelled")
    pub status: String,
}

/// Aggregated agency figures for the revenue report screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueReportDto {
    pub fleet_size: usize,
    pub available_vehicles: usize,
    pub customer_count: usize,
    pub total_rentals: usize,
    pub active_rentals: usize,
    pub completed_rentals: usize,
    /// Sum of total_cost over completed rentals
    pub total_revenue: f64,
}
