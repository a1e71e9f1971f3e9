//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod entries;
pub mod exits;
pub mod health;
pub mod slots;
pub mod transactions;

pub use entries::entry_handler;
pub use exits::exit_handler;
pub use health::health_handler;
pub use slots::slots_handler;
pub use transactions::transactions_handler;
