//! Interactive text menu driving the rental engine.
//!
//! Engine failures are printed and the loop continues; only a closed
//! input stream ends the program.

use std::io::{self, Write};

use anyhow::{bail, Result};
use chrono::NaiveDate;

use car_rental_backend::api::AgencyMapper;
use car_rental_backend::domain::commands::customers::AddCustomerCommand;
use car_rental_backend::domain::commands::fleet::AddVehicleCommand;
use car_rental_backend::domain::commands::rentals::CreateRentalCommand;
use car_rental_backend::RentalAgency;
use shared::{CustomerDto, RentalDto, RevenueReportDto, VehicleDto};

pub fn run(agency: &mut RentalAgency) -> Result<()> {
    loop {
        println!("\n========== MAIN MENU ==========");
        println!("1. Car Management");
        println!("2. Customer Management");
        println!("3. Rental Management");
        println!("4. Generate Revenue Report");
        println!("5. Exit");

        match read_int("Enter your choice: ")? {
            1 => fleet_menu(agency)?,
            2 => customer_menu(agency)?,
            3 => rental_menu(agency)?,
            4 => print_report(&AgencyMapper::report_to_dto(agency.revenue_report()), agency.name()),
            5 => {
                println!("\nThank you for using {}!", agency.name());
                return Ok(());
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn fleet_menu(agency: &mut RentalAgency) -> Result<()> {
    println!("\n--- Car Management ---");
    println!("1. Add New Car");
    println!("2. View All Cars");
    println!("3. View Available Cars");
    println!("4. Remove Car");
    println!("5. Back to Main Menu");

    match read_int("Enter your choice: ")? {
        1 => add_vehicle(agency)?,
        2 => print_vehicles(&AgencyMapper::vehicles_to_dto_list(agency.all_vehicles())),
        3 => {
            let category = read_line("Category filter (blank for all): ")?;
            let filter = if category.is_empty() { None } else { Some(category.as_str()) };
            print_vehicles(&AgencyMapper::vehicles_to_dto_list(
                agency.available_vehicles(filter),
            ));
        }
        4 => {
            let vehicle_id = read_line("Enter Car ID to remove: ")?;
            if agency.remove_vehicle(&vehicle_id) {
                println!("Car removed: {vehicle_id}");
            } else {
                println!("Car not removed (unknown id or currently rented).");
            }
        }
        5 => {}
        _ => println!("Invalid choice."),
    }
    Ok(())
}

fn add_vehicle(agency: &mut RentalAgency) -> Result<()> {
    println!("\n--- Add New Car ---");
    let command = AddVehicleCommand {
        id: read_line("Enter Car ID: ")?,
        brand: read_line("Enter Brand: ")?,
        model: read_line("Enter Model: ")?,
        year: read_int("Enter Year: ")?,
        license_plate: read_line("Enter License Plate: ")?,
        daily_rate: read_f64("Enter Daily Rate: ")?,
        category: read_line("Enter Category (Economy/Standard/Luxury/SUV): ")?,
    };
    match agency.add_vehicle(command) {
        Ok(vehicle) => println!("Car added: {} {} {}", vehicle.id, vehicle.brand, vehicle.model),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn customer_menu(agency: &mut RentalAgency) -> Result<()> {
    println!("\n--- Customer Management ---");
    println!("1. Add New Customer");
    println!("2. View All Customers");
    println!("3. View Customer Details");
    println!("4. Back to Main Menu");

    match read_int("Enter your choice: ")? {
        1 => add_customer(agency)?,
        2 => {
            for customer in AgencyMapper::customers_to_dto_list(agency.all_customers()) {
                print_customer(&customer);
            }
        }
        3 => customer_details(agency)?,
        4 => {}
        _ => println!("Invalid choice."),
    }
    Ok(())
}

fn add_customer(agency: &mut RentalAgency) -> Result<()> {
    println!("\n--- Add New Customer ---");
    let command = AddCustomerCommand {
        id: read_line("Enter Customer ID: ")?,
        first_name: read_line("Enter First Name: ")?,
        last_name: read_line("Enter Last Name: ")?,
        email: read_line("Enter Email: ")?,
        phone: read_line("Enter Phone: ")?,
        license_number: read_line("Enter License Number: ")?,
    };
    match agency.add_customer(command) {
        Ok(customer) => println!("Customer added: {} ({})", customer.id, customer.full_name()),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

fn customer_details(agency: &RentalAgency) -> Result<()> {
    let customer_id = read_line("Enter Customer ID: ")?;
    let Some(customer) = agency.find_customer(&customer_id) else {
        println!("Customer not found.");
        return Ok(());
    };

    let history = customer.rental_history.clone();
    print_customer(&AgencyMapper::customer_to_dto(customer));

    println!("Rental history:");
    if history.is_empty() {
        println!("  (no rentals yet)");
    }
    for rental_id in history {
        if let Some(rental) = agency.find_rental(&rental_id) {
            print_rental(&AgencyMapper::rental_to_dto(rental));
        }
    }
    Ok(())
}

fn rental_menu(agency: &mut RentalAgency) -> Result<()> {
    println!("\n--- Rental Management ---");
    println!("1. Create New Rental");
    println!("2. Complete Rental (Return Car)");
    println!("3. Cancel Rental");
    println!("4. View All Rentals");
    println!("5. View Active Rentals");
    println!("6. Back to Main Menu");

    match read_int("Enter your choice: ")? {
        1 => create_rental(agency)?,
        2 => {
            print_rentals(&AgencyMapper::rentals_to_dto_list(agency.active_rentals()));
            let rental_id = read_line("Enter Rental ID to complete: ")?;
            match agency.complete_rental(&rental_id) {
                Ok(rental) => println!("Rental {} completed, total {:.2}.", rental.id, rental.total_cost),
                Err(err) => println!("Error: {err}"),
            }
        }
        3 => {
            print_rentals(&AgencyMapper::rentals_to_dto_list(agency.active_rentals()));
            let rental_id = read_line("Enter Rental ID to cancel: ")?;
            match agency.cancel_rental(&rental_id) {
                Ok(rental) => println!("Rental {} cancelled.", rental.id),
                Err(err) => println!("Error: {err}"),
            }
        }
        4 => print_rentals(&AgencyMapper::rentals_to_dto_list(agency.all_rentals())),
        5 => print_rentals(&AgencyMapper::rentals_to_dto_list(agency.active_rentals())),
        6 => {}
        _ => println!("Invalid choice."),
    }
    Ok(())
}

fn create_rental(agency: &mut RentalAgency) -> Result<()> {
    println!("\n--- Create New Rental ---");
    print_vehicles(&AgencyMapper::vehicles_to_dto_list(agency.available_vehicles(None)));

    let command = CreateRentalCommand {
        customer_id: read_line("Enter Customer ID: ")?,
        vehicle_id: read_line("Enter Car ID: ")?,
        start_date: read_date("Enter Start Date (YYYY-MM-DD): ")?,
        end_date: read_date("Enter End Date (YYYY-MM-DD): ")?,
    };
    match agency.create_rental(command) {
        Ok(rental) => {
            println!("Rental created:");
            print_rental(&AgencyMapper::rental_to_dto(rental));
        }
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}

// ---- rendering ----

fn print_vehicles(vehicles: &[VehicleDto]) {
    if vehicles.is_empty() {
        println!("No cars to show.");
        return;
    }
    for vehicle in vehicles {
        println!(
            "  {} | {} {} ({}) | plate {} | {:.2}/day | {} | {}",
            vehicle.id,
            vehicle.brand,
            vehicle.model,
            vehicle.year,
            vehicle.license_plate,
            vehicle.daily_rate,
            vehicle.category,
            vehicle.status,
        );
    }
}

fn print_customer(customer: &CustomerDto) {
    println!(
        "  {} | {} | {} | {} | license {} | {} rental(s)",
        customer.id,
        customer.full_name,
        customer.email,
        customer.phone,
        customer.license_number,
        customer.total_rentals,
    );
}

fn print_rentals(rentals: &[RentalDto]) {
    if rentals.is_empty() {
        println!("No rentals to show.");
        return;
    }
    for rental in rentals {
        print_rental(rental);
    }
}

fn print_rental(rental: &RentalDto) {
    println!(
        "  {} | customer {} | car {} | {} -> {} | {} day(s) | {:.2} | {}",
        rental.id,
        rental.customer_id,
        rental.vehicle_id,
        rental.start_date,
        rental.end_date,
        rental.days,
        rental.total_cost,
        rental.status,
    );
}

fn print_report(report: &RevenueReportDto, agency_name: &str) {
    println!("\n========== REVENUE REPORT ==========");
    println!("Agency:            {agency_name}");
    println!("Total Cars:        {}", report.fleet_size);
    println!("Available Cars:    {}", report.available_vehicles);
    println!("Total Customers:   {}", report.customer_count);
    println!("Total Rentals:     {}", report.total_rentals);
    println!("Active Rentals:    {}", report.active_rentals);
    println!("Completed Rentals: {}", report.completed_rentals);
    println!("Total Revenue:     {:.2}", report.total_revenue);
    println!("====================================");
}

// ---- input helpers ----

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

fn read_int(prompt: &str) -> Result<i32> {
    loop {
        match read_line(prompt)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

fn read_f64(prompt: &str) -> Result<f64> {
    loop {
        match read_line(prompt)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

fn read_date(prompt: &str) -> Result<NaiveDate> {
    loop {
        match NaiveDate::parse_from_str(&read_line(prompt)?, "%Y-%m-%d") {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid date. Use YYYY-MM-DD."),
        }
    }
}
