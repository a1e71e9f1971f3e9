//! Slot entity: one cell of the parking grid.

use super::vehicle::{Position, SizeClass};

/// Occupancy state of a grid cell.
///
/// The naming follows the facility's own vocabulary: `Open` is a free slot,
/// `Vacant` is a slot with a car in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Open,
    Vacant,
    Road,
}

impl SlotKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotKind::Open => "open",
            SlotKind::Vacant => "vacant",
            SlotKind::Road => "road",
        }
    }
}

/// A single cell of the parking grid.
///
/// `occupant_plate` is `Some` exactly when `kind` is [`SlotKind::Vacant`];
/// the fields are private so only [`crate::domain::SlotGrid`] can change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    position: Position,
    size: SizeClass,
    kind: SlotKind,
    occupant_plate: Option<String>,
}

impl Slot {
    /// Creates a free slot.
    pub fn open(position: Position, size: SizeClass) -> Self {
        Self {
            position,
            size,
            kind: SlotKind::Open,
            occupant_plate: None,
        }
    }

    /// Creates a driveway cell. Driveways report `Large` as their size.
    pub fn road(position: Position) -> Self {
        Self {
            position,
            size: SizeClass::Large,
            kind: SlotKind::Road,
            occupant_plate: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> SizeClass {
        self.size
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn occupant_plate(&self) -> Option<&str> {
        self.occupant_plate.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.kind == SlotKind::Open
    }

    pub fn is_vacant(&self) -> bool {
        self.kind == SlotKind::Vacant
    }

    pub fn is_road(&self) -> bool {
        self.kind == SlotKind::Road
    }

    /// Returns true if this slot is free and large enough for `vehicle`.
    pub fn accepts(&self, vehicle: SizeClass) -> bool {
        self.is_open() && vehicle.fits_in(self.size)
    }

    pub(crate) fn park(&mut self, plate: &str) {
        debug_assert!(self.is_open());
        self.kind = SlotKind::Vacant;
        self.occupant_plate = Some(plate.to_string());
    }

    pub(crate) fn clear(&mut self) -> Option<String> {
        debug_assert!(self.is_vacant());
        self.kind = SlotKind::Open;
        self.occupant_plate.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_slot_creation() {
        let slot = Slot::open(Position::new(2, 0), SizeClass::Medium);

        assert_eq!(slot.position(), Position::new(2, 0));
        assert_eq!(slot.size(), SizeClass::Medium);
        assert!(slot.is_open());
        assert!(slot.occupant_plate().is_none());
    }

    #[test]
    fn test_road_never_accepts() {
        let road = Slot::road(Position::new(3, 1));

        assert!(road.is_road());
        for size in SizeClass::ALL {
            assert!(!road.accepts(size));
        }
    }

    #[test]
    fn test_park_and_clear_keep_plate_in_sync() {
        let mut slot = Slot::open(Position::new(0, 0), SizeClass::Small);

        slot.park("P01");
        assert!(slot.is_vacant());
        assert_eq!(slot.occupant_plate(), Some("P01"));
        assert!(!slot.accepts(SizeClass::Small));

        let plate = slot.clear();
        assert_eq!(plate.as_deref(), Some("P01"));
        assert!(slot.is_open());
        assert!(slot.occupant_plate().is_none());
    }

    #[test]
    fn test_accepts_respects_size_order() {
        let medium = Slot::open(Position::new(1, 2), SizeClass::Medium);

        assert!(medium.accepts(SizeClass::Small));
        assert!(medium.accepts(SizeClass::Medium));
        assert!(!medium.accepts(SizeClass::Large));
    }
}
