//! Demo fleet and customers seeded at startup, created exclusively
//! through the agency's public operations.

use anyhow::Result;
use log::info;

use car_rental_backend::domain::commands::customers::AddCustomerCommand;
use car_rental_backend::domain::commands::fleet::AddVehicleCommand;
use car_rental_backend::RentalAgency;

pub fn seed(agency: &mut RentalAgency) -> Result<()> {
    info!("Seeding sample data");

    let vehicles = [
        ("C001", "Toyota", "Camry", 2022, "KAB123A", 50.0, "Standard"),
        ("C002", "Honda", "Civic", 2023, "KAC456B", 45.0, "Economy"),
        ("C003", "BMW", "X5", 2023, "KAD789C", 120.0, "Luxury"),
        ("C004", "Toyota", "RAV4", 2022, "KAE012D", 70.0, "SUV"),
        ("C005", "Mercedes", "C-Class", 2023, "KAF345E", 100.0, "Luxury"),
    ];
    for (id, brand, model, year, plate, rate, category) in vehicles {
        agency.add_vehicle(AddVehicleCommand {
            id: id.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            year,
            license_plate: plate.to_string(),
            daily_rate: rate,
            category: category.to_string(),
        })?;
    }

    let customers = [
        ("CUST001", "John", "Doe", "john.doe@email.com", "+254700123456", "DL123456"),
        ("CUST002", "Jane", "Smith", "jane.smith@email.com", "+254701234567", "DL234567"),
        ("CUST003", "Mike", "Johnson", "mike.j@email.com", "+254702345678", "DL345678"),
    ];
    for (id, first, last, email, phone, license) in customers {
        agency.add_customer(AddCustomerCommand {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            license_number: license.to_string(),
        })?;
    }

    println!("Sample data initialized: 5 vehicles, 3 customers.\n");
    Ok(())
}
