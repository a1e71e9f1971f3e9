//! Transaction ledger: one entry per recorded stay, newest first.

use chrono::{NaiveDateTime, TimeDelta};

use super::entities::{SizeClass, Transaction};
use super::error::ParkingError;
use super::fee::FeeCalculator;

/// Re-entries this close to the previous exit continue the previous stay.
pub const GRACE_WINDOW: TimeDelta = TimeDelta::hours(1);

/// What an accepted entry will do to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPlan {
    /// Reopen the closed transaction at this index (grace-window re-entry).
    Reopen(usize),
    /// Prepend a new open transaction.
    Append,
}

/// Append/update log of parking transactions.
///
/// New transactions are prepended, so index 0 is always the most recently
/// started stay. At most one transaction per plate is open at any time.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    grace_window: TimeDelta,
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_grace_window(GRACE_WINDOW)
    }

    pub fn with_grace_window(grace_window: TimeDelta) -> Self {
        Self {
            transactions: Vec::new(),
            grace_window,
        }
    }

    /// Snapshot of every transaction, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions recorded for `plate`, newest first.
    pub fn history<'a>(&'a self, plate: &'a str) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.transactions
            .iter()
            .filter(move |tx| tx.plate_number == plate)
    }

    pub fn open_transaction(&self, plate: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|tx| tx.plate_number == plate && tx.is_open())
    }

    pub fn has_open_transaction(&self, plate: &str) -> bool {
        self.open_transaction(plate).is_some()
    }

    /// Validates an entry for `plate` at `start` without touching the ledger.
    ///
    /// # Errors
    ///
    /// - [`ParkingError::VehicleAlreadyParked`] if `plate` has an open transaction
    /// - [`ParkingError::TimeTravel`] if `start` does not come after every
    ///   recorded exit of `plate`
    pub fn plan_entry(&self, plate: &str, start: NaiveDateTime) -> Result<EntryPlan, ParkingError> {
        if self.has_open_transaction(plate) {
            return Err(ParkingError::VehicleAlreadyParked);
        }

        if self.history(plate).any(|tx| tx.end.is_some_and(|end| end >= start)) {
            return Err(ParkingError::TimeTravel);
        }

        let last_closed = self
            .transactions
            .iter()
            .enumerate()
            .find_map(|(index, tx)| match tx.end {
                Some(end) if tx.plate_number == plate => Some((index, end)),
                _ => None,
            });

        match last_closed {
            Some((index, end)) if start - end <= self.grace_window => Ok(EntryPlan::Reopen(index)),
            _ => Ok(EntryPlan::Append),
        }
    }

    /// Applies a plan produced by [`Ledger::plan_entry`] on this same, unchanged ledger.
    pub(crate) fn commit_entry(
        &mut self,
        plan: EntryPlan,
        plate: &str,
        start: NaiveDateTime,
    ) -> &Transaction {
        match plan {
            EntryPlan::Reopen(index) => {
                let tx = &mut self.transactions[index];
                tx.reopen();
                &*tx
            }
            EntryPlan::Append => {
                self.transactions
                    .insert(0, Transaction::new(plate.to_string(), start));
                &self.transactions[0]
            }
        }
    }

    /// Records the arrival of `plate` at `start`.
    ///
    /// Returns the plan that was applied, so callers can tell a grace-window
    /// merge from a new stay.
    ///
    /// # Errors
    ///
    /// See [`Ledger::plan_entry`].
    pub fn begin_entry(&mut self, plate: &str, start: NaiveDateTime) -> Result<EntryPlan, ParkingError> {
        let plan = self.plan_entry(plate, start)?;
        self.commit_entry(plan, plate, start);
        Ok(plan)
    }

    /// Validates an exit for `plate` at `end` and returns the open transaction.
    ///
    /// # Errors
    ///
    /// - [`ParkingError::VehicleNotFound`] if `plate` has no open transaction
    /// - [`ParkingError::InvalidTimeRange`] if `end` is not after its start
    pub fn check_exit(&self, plate: &str, end: NaiveDateTime) -> Result<&Transaction, ParkingError> {
        let tx = self
            .open_transaction(plate)
            .ok_or(ParkingError::VehicleNotFound)?;

        if end <= tx.start {
            return Err(ParkingError::InvalidTimeRange);
        }

        Ok(tx)
    }

    /// Closes the open transaction of `plate`, charging for a `slot_size` slot.
    ///
    /// # Errors
    ///
    /// See [`Ledger::check_exit`].
    pub fn close_exit(
        &mut self,
        plate: &str,
        end: NaiveDateTime,
        slot_size: SizeClass,
        fees: &FeeCalculator,
    ) -> Result<&Transaction, ParkingError> {
        self.check_exit(plate, end)?;

        let tx = self
            .transactions
            .iter_mut()
            .find(|tx| tx.plate_number == plate && tx.is_open())
            .ok_or(ParkingError::VehicleNotFound)?;

        let payment = fees.compute_fee(tx.start, end, slot_size);
        tx.close(end, payment);
        Ok(&*tx)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
