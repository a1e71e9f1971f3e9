//! Core domain entities representing the parking data model.
//!
//! Entities are plain data structures; the rules that move them between states
//! live in the components of [`crate::domain`].
//!
//! # Entity Types
//!
//! - [`Slot`] - One cell of the parking grid (slot or driveway)
//! - [`Transaction`] - One recorded stay of a vehicle
//! - [`SizeClass`], [`Entrance`], [`Position`] - Value types

pub mod slot;
pub mod transaction;
pub mod vehicle;

pub use slot::{Slot, SlotKind};
pub use transaction::Transaction;
pub use vehicle::{Entrance, ParseValueError, Position, SizeClass};
