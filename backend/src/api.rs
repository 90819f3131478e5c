//! Mappers projecting domain snapshots into the `shared` DTOs.

use shared::{CustomerDto, RentalDto, RevenueReportDto, VehicleDto};

use crate::domain::models::customer::Customer;
use crate::domain::models::rental::Rental;
use crate::domain::models::report::RevenueReport;
use crate::domain::models::vehicle::Vehicle;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct AgencyMapper;

impl AgencyMapper {
    /// Convert a domain Vehicle to its display DTO.
    pub fn vehicle_to_dto(vehicle: Vehicle) -> VehicleDto {
        let status = if vehicle.available { "Available" } else { "Rented" };
        VehicleDto {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            license_plate: vehicle.license_plate,
            daily_rate: vehicle.daily_rate,
            category: vehicle.category,
            status: status.to_string(),
        }
    }

    /// Convert a domain Customer to its display DTO.
    pub fn customer_to_dto(customer: Customer) -> CustomerDto {
        CustomerDto {
            id: customer.id.clone(),
            full_name: customer.full_name(),
            email: customer.email,
            phone: customer.phone,
            license_number: customer.license_number,
            total_rentals: customer.rental_history.len(),
        }
    }

    /// Convert a domain Rental to its display DTO.
    pub fn rental_to_dto(rental: Rental) -> RentalDto {
        RentalDto {
            id: rental.id,
            customer_id: rental.customer_id,
            vehicle_id: rental.vehicle_id,
            start_date: rental.start_date.format(DATE_FORMAT).to_string(),
            end_date: rental.end_date.format(DATE_FORMAT).to_string(),
            days: rental.days,
            total_cost: rental.total_cost,
            status: rental.status.label().to_string(),
        }
    }

    pub fn report_to_dto(report: RevenueReport) -> RevenueReportDto {
        RevenueReportDto {
            fleet_size: report.fleet_size,
            available_vehicles: report.available_vehicles,
            customer_count: report.customer_count,
            total_rentals: report.total_rentals,
            active_rentals: report.active_rentals,
            completed_rentals: report.completed_rentals,
            total_revenue: report.total_revenue,
        }
    }

    pub fn vehicles_to_dto_list(vehicles: Vec<Vehicle>) -> Vec<VehicleDto> {
        vehicles.into_iter().map(Self::vehicle_to_dto).collect()
    }

    pub fn rentals_to_dto_list(rentals: Vec<Rental>) -> Vec<RentalDto> {
        rentals.into_iter().map(Self::rental_to_dto).collect()
    }

    pub fn customers_to_dto_list(customers: Vec<Customer>) -> Vec<CustomerDto> {
        customers.into_iter().map(Self::customer_to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::rental::RentalStatus;
    use chrono::NaiveDate;

    #[test]
    fn rental_dto_formats_dates_and_status() {
        let rental = Rental {
            id: "R1000".to_string(),
            customer_id: "CUST001".to_string(),
            vehicle_id: "C001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 6).expect("valid date"),
            days: 5,
            total_cost: 250.0,
            status: RentalStatus::Completed,
        };
        let dto = AgencyMapper::rental_to_dto(rental);
        assert_eq!(dto.start_date, "2024-01-01");
        assert_eq!(dto.end_date, "2024-01-06");
        assert_eq!(dto.status, "Completed");
    }

    #[test]
    fn vehicle_dto_labels_availability() {
        let vehicle = Vehicle {
            id: "C001".to_string(),
            brand: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2022,
            license_plate: "KAB123A".to_string(),
            daily_rate: 50.0,
            category: "Standard".to_string(),
            available: false,
        };
        let dto = AgencyMapper::vehicle_to_dto(vehicle);
        assert_eq!(dto.status, "Rented");
    }
}
