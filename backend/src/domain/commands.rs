//! Domain-level command types.
//!
//! These structs carry the caller-supplied fields of each mutating
//! operation into the agency; frontends build them from whatever input
//! surface they expose (forms, prompts, JSON).

pub mod fleet {
    /// Input for registering a vehicle in the fleet.
    #[derive(Debug, Clone)]
    pub struct AddVehicleCommand {
        pub id: String,
        pub brand: String,
        pub model: String,
        pub year: i32,
        pub license_plate: String,
        pub daily_rate: f64,
        pub category: String,
    }
}

pub mod customers {
    /// Input for registering a customer.
    #[derive(Debug, Clone)]
    pub struct AddCustomerCommand {
        pub id: String,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
        pub phone: String,
        pub license_number: String,
    }
}

pub mod rentals {
    use chrono::NaiveDate;

    /// Input for creating a rental transaction.
    #[derive(Debug, Clone)]
    pub struct CreateRentalCommand {
        pub customer_id: String,
        pub vehicle_id: String,
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
    }
}
