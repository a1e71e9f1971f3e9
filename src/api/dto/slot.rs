//! DTOs for the slot grid snapshot.

use serde::Serialize;

use crate::domain::Occupancy;
use crate::domain::entities::{Position, Slot};

/// Grid coordinate as exposed on the wire.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SlotPosition {
    pub x: i32,
    pub y: i32,
}

impl From<Position> for SlotPosition {
    fn from(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }
}

/// One grid cell.
///
/// `status` is `open` (free), `vacant` (occupied) or `road` (driveway).
#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub x: i32,
    pub y: i32,
    pub size: String,
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,
}

impl From<&Slot> for SlotResponse {
    fn from(slot: &Slot) -> Self {
        let position = slot.position();
        Self {
            x: position.x,
            y: position.y,
            size: slot.size().to_string(),
            status: slot.kind().as_str(),
            plate_number: slot.occupant_plate().map(str::to_string),
        }
    }
}

/// Cell counts by state.
#[derive(Debug, Serialize)]
pub struct OccupancyResponse {
    pub open: usize,
    pub vacant: usize,
    pub road: usize,
}

impl From<Occupancy> for OccupancyResponse {
    fn from(occupancy: Occupancy) -> Self {
        Self {
            open: occupancy.open,
            vacant: occupancy.vacant,
            road: occupancy.road,
        }
    }
}

/// Full grid snapshot, layout order.
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub occupancy: OccupancyResponse,
    pub slots: Vec<SlotResponse>,
}
