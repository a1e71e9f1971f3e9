//! # Parking Facility
//!
//! A parking lot simulator: vehicles of three sizes enter through one of three
//! entrances, get the nearest slot that fits them, and pay a tiered fee on exit.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Grid, ledger, allocation and billing, free of I/O
//! - **Application Layer** ([`application`]) - Request serialization, logging and metrics
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML dashboard
//! - **Scenario** ([`scenario`]) - Line-based scripts replayed by the `simulate` binary
//!
//! ## Rules
//!
//! - Small cars fit every slot, medium cars fit medium and large slots, large
//!   cars only large slots.
//! - The first 3 hours cost a flat 40; each further hour is billed at the
//!   slot's hourly rate (20, 60 or 100). A full 24 hours cost 5000.
//! - A vehicle coming back within an hour of leaving continues its previous stay.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service
//! cargo run
//!
//! # Replay a scenario file
//! cargo run --bin simulate -- scenario.txt
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod scenario;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ParkingService;
    pub use crate::domain::entities::{Entrance, Position, SizeClass, Slot, Transaction};
    pub use crate::domain::{EntryRequest, ExitRequest, Facility, ParkingError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
