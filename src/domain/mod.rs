//! Domain layer containing the parking entities and the allocation/billing core.
//!
//! Everything here is synchronous and free of I/O; the outer layers serialize
//! requests and hand plain values in.
//!
//! # Architecture
//!
//! - [`entities`] - Slots, transactions and value types
//! - [`slot_grid`] - The grid layout and its occupancy state
//! - [`ledger`] - Transaction log with the grace-window re-entry rule
//! - [`allocation`] - Nearest eligible slot selection
//! - [`fee`] - Tiered hourly/daily fee computation
//! - [`tariff`] - Pricing and entrance coordinate tables
//! - [`facility`] - Owned state and the entry/exit operations
//!
//! # Request Flow
//!
//! 1. Entry: ledger checks → slot search → grid mutation → ledger append/reopen
//! 2. Exit: ledger lookup → fee computation → grid release → ledger close

pub mod allocation;
pub mod entities;
pub mod error;
pub mod facility;
pub mod fee;
pub mod ledger;
pub mod slot_grid;
pub mod tariff;

pub use allocation::AllocationEngine;
pub use error::{ParkingError, RequestKind};
pub use facility::{EntryReceipt, EntryRequest, ExitReceipt, ExitRequest, Facility};
pub use fee::FeeCalculator;
pub use ledger::{EntryPlan, Ledger};
pub use slot_grid::{LayoutCell, Occupancy, SlotGrid};
pub use tariff::{EntranceTable, Tariff};
