//! Application layer services implementing request orchestration.
//!
//! Services own the domain state, serialize access to it, and add the
//! logging and metrics the pure domain layer stays free of.
//!
//! # Available Services
//!
//! - [`services::parking_service::ParkingService`] - Vehicle entry/exit and snapshots

pub mod services;
