use anyhow::Result;
use log::info;

use car_rental_backend::RentalAgency;

mod menu;
mod sample_data;

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting car rental CLI");

    let mut agency = RentalAgency::new("AG001", "Zetech Car Rentals");

    println!("==============================================");
    println!("   WELCOME TO {} ", agency.name().to_uppercase());
    println!("==============================================");

    sample_data::seed(&mut agency)?;

    menu::run(&mut agency)
}
