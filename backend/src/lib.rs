//! # Car Rental Engine
//!
//! Library backend for the car rental system. The [`domain`] module owns
//! the fleet, customer registry, and rental ledger behind the
//! [`RentalAgency`](domain::RentalAgency) aggregate; the [`api`] module
//! projects domain snapshots into the DTOs of the `shared` crate for
//! frontends to render.
//!
//! The engine is synchronous and in-memory: every operation runs to
//! completion on the caller's thread, and nothing is persisted across
//! process restarts.

pub mod api;
pub mod domain;

pub use domain::agency::RentalAgency;
pub use domain::errors::AgencyError;
