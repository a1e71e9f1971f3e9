//! Compile-time configuration tables: pricing and entrance coordinates.
//!
//! The allocation and fee algorithms read every constant from these two
//! values, so a different facility only needs different tables.

use super::entities::{Entrance, Position, SizeClass};

pub const HOURS_PER_DAY: u64 = 24;

/// Pricing table used by [`crate::domain::FeeCalculator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tariff {
    /// Flat fee charged for every stay.
    pub base_fee: u64,
    /// Hours covered by the flat fee.
    pub flat_hours: u64,
    /// Charge per full day once a stay reaches 24 hours.
    pub daily_rate: u64,
    pub small_rate: u64,
    pub medium_rate: u64,
    pub large_rate: u64,
}

impl Tariff {
    /// Hourly rate for time beyond the flat window, by slot size.
    pub fn hourly_rate(&self, size: SizeClass) -> u64 {
        match size {
            SizeClass::Small => self.small_rate,
            SizeClass::Medium => self.medium_rate,
            SizeClass::Large => self.large_rate,
        }
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            base_fee: 40,
            flat_hours: 3,
            daily_rate: 5000,
            small_rate: 20,
            medium_rate: 60,
            large_rate: 100,
        }
    }
}

/// Reference coordinate of each entrance, used for distance ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntranceTable {
    pub a: Position,
    pub b: Position,
    pub c: Position,
}

impl EntranceTable {
    pub fn reference(&self, entrance: Entrance) -> Position {
        match entrance {
            Entrance::A => self.a,
            Entrance::B => self.b,
            Entrance::C => self.c,
        }
    }
}

impl Default for EntranceTable {
    fn default() -> Self {
        Self {
            a: Position::new(0, 1),
            b: Position::new(7, 0),
            c: Position::new(10, 1),
        }
    }
}
