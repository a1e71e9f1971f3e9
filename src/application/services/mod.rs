//! Business logic services for the application layer.

pub mod parking_service;

pub use parking_service::ParkingService;
