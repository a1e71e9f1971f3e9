//! Transaction entity: one recorded stay of a vehicle.

use chrono::{NaiveDateTime, TimeDelta};

/// A parking stay recorded in the ledger.
///
/// A transaction is open while `end` is `None`. Closing it sets `end` and the
/// computed `payment`; a grace-window re-entry may reopen it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub plate_number: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub payment: u64,
}

impl Transaction {
    /// Creates an open transaction with no payment.
    pub fn new(plate_number: String, start: NaiveDateTime) -> Self {
        Self {
            plate_number,
            start,
            end: None,
            payment: 0,
        }
    }

    /// Returns true while the vehicle is still parked.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Length of the stay, if closed.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.end.map(|end| end - self.start)
    }

    pub(crate) fn close(&mut self, end: NaiveDateTime, payment: u64) {
        self.end = Some(end);
        self.payment = payment;
    }

    pub(crate) fn reopen(&mut self) {
        self.end = None;
        self.payment = 0;
    }
}
