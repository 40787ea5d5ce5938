//! vehicle-core - Core traits and types for the user vehicle lookup service
//!
//! This crate defines the `VehicleDetailsService` trait, the domain types it
//! operates on, and the error type shared by all implementations. The HTTP
//! layer (`vehicle-api`) is written against the trait only, so backends can
//! be swapped without touching any handler.

pub mod error;
pub mod models;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use models::{InvalidVin, VehicleDetails, VehicleIdentificationNumber};
pub use service::VehicleDetailsService;
