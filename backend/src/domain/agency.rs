//! The rental agency aggregate root.
//!
//! The agency is the sole owner of the fleet, the customer registry, and
//! the rental ledger, and the only component that mutates any of them.
//! Every cross-entity invariant (id uniqueness, vehicle availability,
//! history ordering) is enforced here. Queries hand out snapshots, never
//! live handles into the collections.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::domain::commands::customers::AddCustomerCommand;
use crate::domain::commands::fleet::AddVehicleCommand;
use crate::domain::commands::rentals::CreateRentalCommand;
use crate::domain::errors::AgencyError;
use crate::domain::models::customer::Customer;
use crate::domain::models::rental::{Rental, RentalStatus};
use crate::domain::models::report::RevenueReport;
use crate::domain::models::vehicle::Vehicle;

/// First value of the rental-id counter; ids are `"R" + counter`.
const INITIAL_RENTAL_COUNTER: u32 = 1000;

pub struct RentalAgency {
    id: String,
    name: String,
    fleet: HashMap<String, Vehicle>,
    customers: HashMap<String, Customer>,
    rentals: HashMap<String, Rental>,
    /// Monotonic id source; incremented on every allocation attempt,
    /// including ones whose rental construction later fails.
    rental_counter: u32,
}

impl RentalAgency {
    pub fn new(id: &str, name: &str) -> Self {
        RentalAgency {
            id: id.to_string(),
            name: name.to_string(),
            fleet: HashMap::new(),
            customers: HashMap::new(),
            rentals: HashMap::new(),
            rental_counter: INITIAL_RENTAL_COUNTER,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ---- fleet management ----

    /// Register a new vehicle in the fleet.
    pub fn add_vehicle(&mut self, command: AddVehicleCommand) -> Result<Vehicle, AgencyError> {
        Self::validate_add_vehicle(&command)?;
        if self.fleet.contains_key(&command.id) {
            return Err(AgencyError::DuplicateId { id: command.id });
        }

        let vehicle = Vehicle {
            id: command.id,
            brand: command.brand,
            model: command.model,
            year: command.year,
            license_plate: command.license_plate,
            daily_rate: command.daily_rate,
            category: command.category,
            available: true,
        };
        info!(
            "Added vehicle {} ({} {}) at {:.2}/day",
            vehicle.id, vehicle.brand, vehicle.model, vehicle.daily_rate
        );
        self.fleet.insert(vehicle.id.clone(), vehicle.clone());
        Ok(vehicle)
    }

    /// Remove a vehicle from the fleet.
    ///
    /// Returns `false` (not removed) when the id is unknown or the
    /// vehicle is currently rented out.
    pub fn remove_vehicle(&mut self, vehicle_id: &str) -> bool {
        match self.fleet.get(vehicle_id) {
            None => {
                warn!("Cannot remove vehicle {vehicle_id}: not found");
                false
            }
            Some(vehicle) if !vehicle.available => {
                warn!("Cannot remove vehicle {vehicle_id}: currently rented");
                false
            }
            Some(_) => {
                self.fleet.remove(vehicle_id);
                info!("Removed vehicle {vehicle_id} from the fleet");
                true
            }
        }
    }

    pub fn find_vehicle(&self, vehicle_id: &str) -> Option<Vehicle> {
        self.fleet.get(vehicle_id).cloned()
    }

    /// Available vehicles, optionally narrowed to a category
    /// (case-insensitive), sorted by id.
    pub fn available_vehicles(&self, category: Option<&str>) -> Vec<Vehicle> {
        debug!("Listing available vehicles, category filter: {category:?}");
        let mut vehicles: Vec<Vehicle> = self
            .fleet
            .values()
            .filter(|vehicle| vehicle.available)
            .filter(|vehicle| category.map_or(true, |c| vehicle.matches_category(c)))
            .cloned()
            .collect();
        vehicles.sort_by(|a, b| a.id.cmp(&b.id));
        vehicles
    }

    /// Every vehicle in the fleet, sorted by id.
    pub fn all_vehicles(&self) -> Vec<Vehicle> {
        let mut vehicles: Vec<Vehicle> = self.fleet.values().cloned().collect();
        vehicles.sort_by(|a, b| a.id.cmp(&b.id));
        vehicles
    }

    // ---- customer management ----

    /// Register a new customer.
    pub fn add_customer(&mut self, command: AddCustomerCommand) -> Result<Customer, AgencyError> {
        Self::validate_add_customer(&command)?;
        if self.customers.contains_key(&command.id) {
            return Err(AgencyError::DuplicateId { id: command.id });
        }

        let customer = Customer {
            id: command.id,
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            phone: command.phone,
            license_number: command.license_number,
            rental_history: Vec::new(),
        };
        info!("Added customer {} ({})", customer.id, customer.full_name());
        self.customers.insert(customer.id.clone(), customer.clone());
        Ok(customer)
    }

    pub fn find_customer(&self, customer_id: &str) -> Option<Customer> {
        self.customers.get(customer_id).cloned()
    }

    /// Every registered customer, sorted by id.
    pub fn all_customers(&self) -> Vec<Customer> {
        let mut customers: Vec<Customer> = self.customers.values().cloned().collect();
        customers.sort_by(|a, b| a.id.cmp(&b.id));
        customers
    }

    // ---- rental management ----

    /// Create a rental transaction.
    ///
    /// Checks run strictly before mutation: customer exists, vehicle
    /// exists, vehicle available, date range valid. The only state a
    /// failed call leaves behind is the consumed counter value when date
    /// validation fails after id allocation.
    pub fn create_rental(&mut self, command: CreateRentalCommand) -> Result<Rental, AgencyError> {
        let CreateRentalCommand { customer_id, vehicle_id, start_date, end_date } = command;

        if !self.customers.contains_key(&customer_id) {
            return Err(AgencyError::CustomerNotFound { id: customer_id });
        }
        let vehicle = self
            .fleet
            .get(&vehicle_id)
            .cloned()
            .ok_or_else(|| AgencyError::VehicleNotFound { id: vehicle_id.clone() })?;
        if !vehicle.available {
            return Err(AgencyError::VehicleUnavailable { id: vehicle_id });
        }

        // The counter is consumed even if construction fails below, so a
        // rejected date range leaves a gap in the id sequence.
        let rental_id = self.allocate_rental_id();
        let rental = Rental::new(&rental_id, &customer_id, &vehicle, start_date, end_date)?;

        if let Some(slot) = self.fleet.get_mut(&vehicle_id) {
            slot.rent_out()?;
        }
        if let Some(customer) = self.customers.get_mut(&customer_id) {
            customer.record_rental(rental_id.clone());
        }
        self.rentals.insert(rental_id.clone(), rental.clone());

        info!(
            "Created rental {rental_id}: customer {customer_id}, vehicle {vehicle_id}, \
             {} days, total {:.2}",
            rental.days, rental.total_cost
        );
        Ok(rental)
    }

    /// Complete a rental and return its vehicle to the fleet.
    pub fn complete_rental(&mut self, rental_id: &str) -> Result<Rental, AgencyError> {
        let rental = self
            .rentals
            .get_mut(rental_id)
            .ok_or_else(|| AgencyError::RentalNotFound { id: rental_id.to_string() })?;
        rental.complete()?;
        let vehicle_id = rental.vehicle_id.clone();
        let snapshot = rental.clone();

        // An active rental always has its vehicle in the fleet, rented.
        if let Some(vehicle) = self.fleet.get_mut(&vehicle_id) {
            vehicle.return_to_fleet()?;
        }
        info!("Completed rental {rental_id}, vehicle {vehicle_id} returned");
        Ok(snapshot)
    }

    /// Cancel a rental.
    ///
    /// Cancelling an already-cancelled rental is accepted and leaves the
    /// vehicle alone; only a completed rental blocks cancellation.
    pub fn cancel_rental(&mut self, rental_id: &str) -> Result<Rental, AgencyError> {
        let rental = self
            .rentals
            .get_mut(rental_id)
            .ok_or_else(|| AgencyError::RentalNotFound { id: rental_id.to_string() })?;
        let was_active = rental.status == RentalStatus::Active;
        rental.cancel()?;
        let vehicle_id = rental.vehicle_id.clone();
        let snapshot = rental.clone();

        if was_active {
            if let Some(vehicle) = self.fleet.get_mut(&vehicle_id) {
                if !vehicle.available {
                    vehicle.return_to_fleet()?;
                }
            }
        }
        info!("Cancelled rental {rental_id}");
        Ok(snapshot)
    }

    /// Move a rental's end date, repricing it against the vehicle's
    /// current daily rate.
    pub fn update_rental_end_date(
        &mut self,
        rental_id: &str,
        end_date: NaiveDate,
    ) -> Result<Rental, AgencyError> {
        let vehicle_id = self
            .rentals
            .get(rental_id)
            .ok_or_else(|| AgencyError::RentalNotFound { id: rental_id.to_string() })?
            .vehicle_id
            .clone();
        let vehicle = self
            .fleet
            .get(&vehicle_id)
            .cloned()
            .ok_or(AgencyError::VehicleNotFound { id: vehicle_id })?;

        let rental = self
            .rentals
            .get_mut(rental_id)
            .ok_or_else(|| AgencyError::RentalNotFound { id: rental_id.to_string() })?;
        rental.set_end_date(&vehicle, end_date)?;
        info!(
            "Rental {rental_id} end date moved to {end_date}, new total {:.2}",
            rental.total_cost
        );
        Ok(rental.clone())
    }

    pub fn find_rental(&self, rental_id: &str) -> Option<Rental> {
        self.rentals.get(rental_id).cloned()
    }

    /// Rentals with `Active` status, sorted by id.
    pub fn active_rentals(&self) -> Vec<Rental> {
        let mut rentals: Vec<Rental> = self
            .rentals
            .values()
            .filter(|rental| rental.status == RentalStatus::Active)
            .cloned()
            .collect();
        rentals.sort_by(|a, b| a.id.cmp(&b.id));
        rentals
    }

    /// Every rental ever created, sorted by id.
    pub fn all_rentals(&self) -> Vec<Rental> {
        let mut rentals: Vec<Rental> = self.rentals.values().cloned().collect();
        rentals.sort_by(|a, b| a.id.cmp(&b.id));
        rentals
    }

    /// Aggregate counts and completed-rental revenue.
    pub fn revenue_report(&self) -> RevenueReport {
        let completed_rentals = self
            .rentals
            .values()
            .filter(|rental| rental.status == RentalStatus::Completed)
            .count();
        let total_revenue = self
            .rentals
            .values()
            .filter(|rental| rental.status == RentalStatus::Completed)
            .map(|rental| rental.total_cost)
            .sum();
        RevenueReport {
            fleet_size: self.fleet.len(),
            available_vehicles: self.fleet.values().filter(|v| v.available).count(),
            customer_count: self.customers.len(),
            total_rentals: self.rentals.len(),
            active_rentals: self.active_rentals().len(),
            completed_rentals,
            total_revenue,
        }
    }

    // ---- internals ----

    fn allocate_rental_id(&mut self) -> String {
        let rental_id = format!("R{}", self.rental_counter);
        self.rental_counter += 1;
        rental_id
    }

    fn validate_add_vehicle(command: &AddVehicleCommand) -> Result<(), AgencyError> {
        let required = [
            ("id", &command.id),
            ("brand", &command.brand),
            ("model", &command.model),
            ("license plate", &command.license_plate),
            ("category", &command.category),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AgencyError::invalid_argument(format!(
                    "vehicle {field} must not be empty"
                )));
            }
        }
        if command.daily_rate <= 0.0 {
            return Err(AgencyError::invalid_argument(format!(
                "daily rate must be positive, got {}",
                command.daily_rate
            )));
        }
        Ok(())
    }

    fn validate_add_customer(command: &AddCustomerCommand) -> Result<(), AgencyError> {
        let required = [
            ("id", &command.id),
            ("first name", &command.first_name),
            ("last name", &command.last_name),
            ("email", &command.email),
            ("phone", &command.phone),
            ("license number", &command.license_number),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AgencyError::invalid_argument(format!(
                    "customer {field} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn test_agency() -> RentalAgency {
        RentalAgency::new("AG001", "Test Rentals")
    }

    fn vehicle_command(id: &str, daily_rate: f64, category: &str) -> AddVehicleCommand {
        AddVehicleCommand {
            id: id.to_string(),
            brand: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2022,
            license_plate: "KAB123A".to_string(),
            daily_rate,
            category: category.to_string(),
        }
    }

    fn customer_command(id: &str) -> AddCustomerCommand {
        AddCustomerCommand {
            id: id.to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "+254700123456".to_string(),
            license_number: "DL123456".to_string(),
        }
    }

    fn rental_command(customer_id: &str, vehicle_id: &str) -> CreateRentalCommand {
        CreateRentalCommand {
            customer_id: customer_id.to_string(),
            vehicle_id: vehicle_id.to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 6),
        }
    }

    fn agency_with_fleet() -> RentalAgency {
        let mut agency = test_agency();
        agency
            .add_vehicle(vehicle_command("C001", 50.0, "Standard"))
            .expect("add C001");
        agency
            .add_vehicle(vehicle_command("C002", 120.0, "Luxury"))
            .expect("add C002");
        agency
            .add_customer(customer_command("CUST001"))
            .expect("add CUST001");
        agency
    }

    #[test]
    fn duplicate_vehicle_id_is_rejected() {
        let mut agency = agency_with_fleet();
        let result = agency.add_vehicle(vehicle_command("C001", 60.0, "Economy"));
        assert!(matches!(result, Err(AgencyError::DuplicateId { .. })));
        assert_eq!(agency.all_vehicles().len(), 2);
    }

    #[test]
    fn duplicate_customer_id_is_rejected() {
        let mut agency = agency_with_fleet();
        let result = agency.add_customer(customer_command("CUST001"));
        assert!(matches!(result, Err(AgencyError::DuplicateId { .. })));
        assert_eq!(agency.all_customers().len(), 1);
    }

    #[test]
    fn add_vehicle_validates_fields() {
        let mut agency = test_agency();
        let result = agency.add_vehicle(vehicle_command("  ", 50.0, "Standard"));
        assert!(matches!(result, Err(AgencyError::InvalidArgument { .. })));
        let result = agency.add_vehicle(vehicle_command("C009", 0.0, "Standard"));
        assert!(matches!(result, Err(AgencyError::InvalidArgument { .. })));
        assert!(agency.all_vehicles().is_empty());
    }

    #[test]
    fn create_rental_prices_and_reserves_the_vehicle() {
        let mut agency = agency_with_fleet();
        let rental = agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("rental succeeds");

        assert_eq!(rental.id, "R1000");
        assert_eq!(rental.days, 5);
        assert_eq!(rental.total_cost, 250.0);
        assert_eq!(rental.status, RentalStatus::Active);
        assert!(!agency.find_vehicle("C001").expect("C001 exists").available);
        let customer = agency.find_customer("CUST001").expect("CUST001 exists");
        assert_eq!(customer.rental_history, vec!["R1000"]);
    }

    #[test]
    fn rental_ids_increase_monotonically() {
        let mut agency = agency_with_fleet();
        let first = agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("first rental");
        let second = agency
            .create_rental(rental_command("CUST001", "C002"))
            .expect("second rental");
        assert_eq!(first.id, "R1000");
        assert_eq!(second.id, "R1001");
    }

    #[test]
    fn failed_date_validation_still_consumes_an_id() {
        let mut agency = agency_with_fleet();
        let result = agency.create_rental(CreateRentalCommand {
            customer_id: "CUST001".to_string(),
            vehicle_id: "C001".to_string(),
            start_date: date(2024, 1, 6),
            end_date: date(2024, 1, 1),
        });
        assert!(matches!(result, Err(AgencyError::InvalidDateRange { .. })));

        // no mutation is observable apart from the consumed counter
        assert!(agency.find_vehicle("C001").expect("C001 exists").available);
        assert!(agency.all_rentals().is_empty());
        assert!(agency
            .find_customer("CUST001")
            .expect("CUST001 exists")
            .rental_history
            .is_empty());

        let rental = agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("valid rental");
        assert_eq!(rental.id, "R1001");
    }

    #[test]
    fn unavailable_vehicle_cannot_be_rented_twice() {
        let mut agency = agency_with_fleet();
        agency
            .add_customer(customer_command("CUST002"))
            .expect("add CUST002");
        agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("first rental");

        let result = agency.create_rental(rental_command("CUST002", "C001"));
        assert!(matches!(result, Err(AgencyError::VehicleUnavailable { .. })));
        assert_eq!(agency.all_rentals().len(), 1);
        assert!(agency
            .find_customer("CUST002")
            .expect("CUST002 exists")
            .rental_history
            .is_empty());
    }

    #[test]
    fn missing_customer_or_vehicle_is_reported() {
        let mut agency = agency_with_fleet();
        let result = agency.create_rental(rental_command("NOBODY", "C001"));
        assert!(matches!(result, Err(AgencyError::CustomerNotFound { .. })));
        let result = agency.create_rental(rental_command("CUST001", "C999"));
        assert!(matches!(result, Err(AgencyError::VehicleNotFound { .. })));
        assert!(matches!(
            agency.complete_rental("R9999"),
            Err(AgencyError::RentalNotFound { .. })
        ));
    }

    #[test]
    fn completing_a_rental_returns_the_vehicle_and_books_revenue() {
        let mut agency = agency_with_fleet();
        let rental = agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("rental");

        let completed = agency.complete_rental(&rental.id).expect("completes");
        assert_eq!(completed.status, RentalStatus::Completed);
        assert!(agency.find_vehicle("C001").expect("C001 exists").available);

        let report = agency.revenue_report();
        assert_eq!(report.completed_rentals, 1);
        assert_eq!(report.total_revenue, 250.0);
    }

    #[test]
    fn cancelled_rentals_free_the_vehicle_but_earn_nothing() {
        let mut agency = agency_with_fleet();
        let rental = agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("rental");

        let cancelled = agency.cancel_rental(&rental.id).expect("cancels");
        assert_eq!(cancelled.status, RentalStatus::Cancelled);
        assert!(agency.find_vehicle("C001").expect("C001 exists").available);
        assert_eq!(agency.revenue_report().total_revenue, 0.0);
    }

    #[test]
    fn transition_guards_hold_through_the_agency() {
        let mut agency = agency_with_fleet();
        let rental = agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("rental");
        agency.complete_rental(&rental.id).expect("completes");

        assert!(matches!(
            agency.cancel_rental(&rental.id),
            Err(AgencyError::InvalidStateTransition { .. })
        ));
        assert!(matches!(
            agency.complete_rental(&rental.id),
            Err(AgencyError::InvalidStateTransition { .. })
        ));
    }

    #[test]
    fn re_cancelling_never_frees_a_vehicle_rented_to_someone_else() {
        let mut agency = agency_with_fleet();
        agency
            .add_customer(customer_command("CUST002"))
            .expect("add CUST002");
        let first = agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("first rental");
        agency.cancel_rental(&first.id).expect("cancel");

        // the vehicle goes straight back out to another customer
        let second = agency
            .create_rental(rental_command("CUST002", "C001"))
            .expect("second rental");
        assert!(!agency.find_vehicle("C001").expect("C001 exists").available);

        // re-cancel of the old rental is accepted and touches nothing
        agency.cancel_rental(&first.id).expect("re-cancel accepted");
        assert!(!agency.find_vehicle("C001").expect("C001 exists").available);
        assert_eq!(
            agency.find_rental(&second.id).expect("still there").status,
            RentalStatus::Active
        );
    }

    #[test]
    fn remove_vehicle_signals_not_removed() {
        let mut agency = agency_with_fleet();
        assert!(!agency.remove_vehicle("C999"));

        agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("rental");
        assert!(!agency.remove_vehicle("C001"));
        assert!(agency.find_vehicle("C001").is_some());

        assert!(agency.remove_vehicle("C002"));
        assert!(agency.find_vehicle("C002").is_none());
    }

    #[test]
    fn available_vehicles_filter_by_category_ignores_case() {
        let agency = agency_with_fleet();
        let luxury = agency.available_vehicles(Some("luxury"));
        assert_eq!(luxury.len(), 1);
        assert_eq!(luxury[0].id, "C002");
        assert_eq!(agency.available_vehicles(None).len(), 2);
        assert!(agency.available_vehicles(Some("SUV")).is_empty());
    }

    #[test]
    fn revenue_report_counts_only_completed_rentals() {
        let mut agency = agency_with_fleet();
        agency
            .add_vehicle(vehicle_command("C003", 70.0, "SUV"))
            .expect("add C003");
        let completed = agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("rental 1");
        agency.complete_rental(&completed.id).expect("complete");
        let cancelled = agency
            .create_rental(rental_command("CUST001", "C002"))
            .expect("rental 2");
        agency.cancel_rental(&cancelled.id).expect("cancel");
        agency
            .create_rental(rental_command("CUST001", "C003"))
            .expect("rental 3 stays active");

        let report = agency.revenue_report();
        assert_eq!(report.fleet_size, 3);
        assert_eq!(report.available_vehicles, 2);
        assert_eq!(report.customer_count, 1);
        assert_eq!(report.total_rentals, 3);
        assert_eq!(report.active_rentals, 1);
        assert_eq!(report.completed_rentals, 1);
        assert_eq!(report.total_revenue, 250.0);
    }

    #[test]
    fn end_date_update_reprices_the_rental() {
        let mut agency = agency_with_fleet();
        let rental = agency
            .create_rental(rental_command("CUST001", "C001"))
            .expect("rental");

        let updated = agency
            .update_rental_end_date(&rental.id, date(2024, 1, 11))
            .expect("extension succeeds");
        assert_eq!(updated.days, 10);
        assert_eq!(updated.total_cost, 500.0);

        let result = agency.update_rental_end_date(&rental.id, date(2024, 1, 1));
        assert!(matches!(result, Err(AgencyError::InvalidDateRange { .. })));
        let unchanged = agency.find_rental(&rental.id).expect("still there");
        assert_eq!(unchanged.days, 10);
    }
}
