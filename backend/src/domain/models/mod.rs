pub mod customer;
pub mod rental;
pub mod report;
pub mod vehicle;
