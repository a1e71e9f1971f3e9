//! The parking facility: owned grid and ledger plus the entry/exit operations.

use chrono::NaiveDateTime;

use super::allocation::AllocationEngine;
use super::entities::{Entrance, Position, SizeClass, Slot, Transaction};
use super::error::{ParkingError, RequestKind};
use super::fee::FeeCalculator;
use super::ledger::{EntryPlan, Ledger};
use super::slot_grid::{Occupancy, SlotGrid};
use super::tariff::{EntranceTable, Tariff};

/// A vehicle arriving at an entrance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRequest {
    pub car_size: SizeClass,
    pub entrance: Entrance,
    pub plate_number: String,
    pub start: NaiveDateTime,
}

/// A vehicle leaving the facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitRequest {
    pub plate_number: String,
    pub end: NaiveDateTime,
}

/// Outcome of an accepted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReceipt {
    pub plate_number: String,
    pub slot: Position,
    pub slot_size: SizeClass,
    /// Distance from the entrance used for ranking.
    pub distance: i32,
    /// True when the entry reopened a stay closed within the grace window.
    pub merged: bool,
}

/// Outcome of an accepted exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReceipt {
    pub slot: Position,
    pub slot_size: SizeClass,
    pub transaction: Transaction,
}

/// Process-wide parking state.
///
/// Owns the [`SlotGrid`] and the [`Ledger`]; both are changed only through
/// [`Facility::submit_entry`] and [`Facility::submit_exit`]. Each request is
/// validated in full before anything is mutated, so a rejected request leaves
/// the facility exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct Facility {
    grid: SlotGrid,
    ledger: Ledger,
    allocator: AllocationEngine,
    fees: FeeCalculator,
}

impl Facility {
    pub fn new(grid: SlotGrid, ledger: Ledger, entrances: EntranceTable, tariff: Tariff) -> Self {
        Self {
            grid,
            ledger,
            allocator: AllocationEngine::new(entrances),
            fees: FeeCalculator::new(tariff),
        }
    }

    /// Parks a vehicle in the nearest eligible slot.
    ///
    /// Checks run in this order: missing plate, vehicle already parked,
    /// start before a recorded exit, no eligible slot.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParkingError`] that applies; nothing is mutated.
    pub fn submit_entry(&mut self, request: EntryRequest) -> Result<EntryReceipt, ParkingError> {
        let plate = request.plate_number.trim();
        if plate.is_empty() {
            return Err(ParkingError::MissingField(RequestKind::Entry));
        }

        let plan = self.ledger.plan_entry(plate, request.start)?;

        let position = self
            .allocator
            .select_slot(self.grid.find_eligible(request.car_size), request.entrance)?
            .position();
        let reference = self.allocator.entrances().reference(request.entrance);

        let slot_size = self.grid.occupy(position, plate)?.size();
        self.ledger.commit_entry(plan, plate, request.start);

        Ok(EntryReceipt {
            plate_number: plate.to_string(),
            slot: position,
            slot_size,
            distance: AllocationEngine::distance(position, reference),
            merged: matches!(plan, EntryPlan::Reopen(_)),
        })
    }

    /// Frees the vehicle's slot and closes its transaction with the fee owed.
    ///
    /// The fee is charged by the size of the slot the vehicle occupied.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParkingError`] that applies: missing plate,
    /// vehicle not parked, end not after start, no slot held by the plate.
    /// Nothing is mutated on error.
    pub fn submit_exit(&mut self, request: ExitRequest) -> Result<ExitReceipt, ParkingError> {
        let plate = request.plate_number.trim();
        if plate.is_empty() {
            return Err(ParkingError::MissingField(RequestKind::Exit));
        }

        self.ledger.check_exit(plate, request.end)?;
        let slot = self.grid.slot_of(plate).ok_or(ParkingError::SlotNotFound)?;
        let (position, slot_size) = (slot.position(), slot.size());

        self.grid.release(plate)?;
        let transaction = self
            .ledger
            .close_exit(plate, request.end, slot_size, &self.fees)?
            .clone();

        Ok(ExitReceipt {
            slot: position,
            slot_size,
            transaction,
        })
    }

    /// Snapshot of the grid in layout order.
    pub fn slots(&self) -> &[Slot] {
        self.grid.slots()
    }

    /// Snapshot of the ledger, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn occupancy(&self) -> Occupancy {
        self.grid.occupancy()
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn tariff(&self) -> &Tariff {
        self.fees.tariff()
    }
}
