//! Nearest-slot selection for an arriving vehicle.

use super::entities::{Entrance, Position, Slot};
use super::error::ParkingError;
use super::tariff::EntranceTable;

/// Picks the slot a vehicle is sent to.
///
/// Distances are Manhattan distances to the entrance's reference point, with
/// reference rows 0 and 2 folded onto the driveway row 1. Ties go to the
/// lower row, except for an entrance whose reference sits on row 2, which
/// sweeps from the bottom row instead. Remaining ties keep layout order.
#[derive(Debug, Clone, Default)]
pub struct AllocationEngine {
    entrances: EntranceTable,
}

impl AllocationEngine {
    pub fn new(entrances: EntranceTable) -> Self {
        Self { entrances }
    }

    pub fn entrances(&self) -> &EntranceTable {
        &self.entrances
    }

    /// Distance used to rank `slot` for vehicles arriving at `reference`.
    pub fn distance(slot: Position, reference: Position) -> i32 {
        let row = match reference.y {
            0 | 2 => 1,
            y => y,
        };
        slot.manhattan(Position::new(reference.x, row))
    }

    /// Returns the best of `eligible` for a vehicle arriving at `entrance`.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::NoSlotAvailable`] if `eligible` is empty.
    pub fn select_slot<'a>(
        &self,
        eligible: Vec<&'a Slot>,
        entrance: Entrance,
    ) -> Result<&'a Slot, ParkingError> {
        let reference = self.entrances.reference(entrance);
        let bottom_up = reference.y == 2;

        eligible
            .into_iter()
            .map(|slot| (Self::distance(slot.position(), reference), slot))
            .min_by(|(da, a), (db, b)| {
                let (ya, yb) = (a.position().y, b.position().y);
                let by_row = if bottom_up { yb.cmp(&ya) } else { ya.cmp(&yb) };
                da.cmp(db).then(by_row)
            })
            .map(|(_, slot)| slot)
            .ok_or(ParkingError::NoSlotAvailable)
    }
}
