//! The parking grid and its occupancy state.

use super::entities::{Position, SizeClass, Slot};
use super::error::ParkingError;

/// One cell of a layout description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutCell {
    Slot(SizeClass),
    Road,
}

const S: LayoutCell = LayoutCell::Slot(SizeClass::Small);
const M: LayoutCell = LayoutCell::Slot(SizeClass::Medium);
const L: LayoutCell = LayoutCell::Slot(SizeClass::Large);
const R: LayoutCell = LayoutCell::Road;

/// Standard facility: 11 columns by 3 rows with a central driveway on row 1
/// and the entrance B gap at `(7, 0)`.
pub const DEFAULT_LAYOUT: [[LayoutCell; 11]; 3] = [
    [S, S, M, M, L, L, M, R, S, M, L],
    [R, R, R, R, R, R, R, R, R, R, R],
    [L, M, S, S, M, L, L, M, S, S, M],
];

/// Counts of grid cells by state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupancy {
    pub open: usize,
    pub vacant: usize,
    pub road: usize,
}

impl Occupancy {
    /// Number of cells that can hold a vehicle.
    pub fn capacity(&self) -> usize {
        self.open + self.vacant
    }
}

/// Fixed layout of slots plus their mutable occupancy.
///
/// Slots are kept in row-major order (`y`, then `x`); every search that has
/// to break a tie falls back to that order.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    slots: Vec<Slot>,
}

impl SlotGrid {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Builds a grid from rows of cells; row index is `y`, column index is `x`.
    pub fn from_layout<Row: AsRef<[LayoutCell]>>(rows: &[Row]) -> Self {
        let slots = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.as_ref().iter().enumerate().map(move |(x, cell)| {
                    let position = Position::new(x as i32, y as i32);
                    match cell {
                        LayoutCell::Slot(size) => Slot::open(position, *size),
                        LayoutCell::Road => Slot::road(position),
                    }
                })
            })
            .collect();

        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn get(&self, position: Position) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.position() == position)
    }

    /// All free slots a vehicle of `size` may use, in layout order.
    pub fn find_eligible(&self, size: SizeClass) -> Vec<&Slot> {
        self.slots.iter().filter(|slot| slot.accepts(size)).collect()
    }

    /// The slot currently holding `plate`, if any.
    pub fn slot_of(&self, plate: &str) -> Option<&Slot> {
        self.slots
            .iter()
            .find(|slot| slot.occupant_plate() == Some(plate))
    }

    /// Parks `plate` in the free slot at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::SlotNotFound`] if there is no free slot at
    /// `position` (missing, already taken, or a driveway).
    pub fn occupy(&mut self, position: Position, plate: &str) -> Result<&Slot, ParkingError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.position() == position && slot.is_open())
            .ok_or(ParkingError::SlotNotFound)?;

        slot.park(plate);
        Ok(&*slot)
    }

    /// Frees the slot held by `plate` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ParkingError::SlotNotFound`] if no slot is held by `plate`.
    pub fn release(&mut self, plate: &str) -> Result<&Slot, ParkingError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.occupant_plate() == Some(plate))
            .ok_or(ParkingError::SlotNotFound)?;

        slot.clear();
        Ok(&*slot)
    }

    pub fn occupancy(&self) -> Occupancy {
        self.slots
            .iter()
            .fold(Occupancy::default(), |mut acc, slot| {
                if slot.is_open() {
                    acc.open += 1;
                } else if slot.is_vacant() {
                    acc.vacant += 1;
                } else {
                    acc.road += 1;
                }
                acc
            })
    }

    /// Grid width and height, derived from the largest coordinates.
    pub fn dimensions(&self) -> (usize, usize) {
        self.slots.iter().fold((0, 0), |(w, h), slot| {
            let p = slot.position();
            (w.max(p.x as usize + 1), h.max(p.y as usize + 1))
        })
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::from_layout(&DEFAULT_LAYOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SlotKind;

    #[test]
    fn test_default_layout_shape() {
        let grid = SlotGrid::default();

        assert_eq!(grid.slots().len(), 33);
        assert_eq!(grid.dimensions(), (11, 3));

        let occupancy = grid.occupancy();
        assert_eq!(occupancy.open, 21);
        assert_eq!(occupancy.vacant, 0);
        assert_eq!(occupancy.road, 12);
        assert_eq!(occupancy.capacity(), 21);

        assert!(grid.get(Position::new(7, 0)).unwrap().is_road());
        assert!(grid.get(Position::new(4, 1)).unwrap().is_road());
    }

    #[test]
    fn test_find_eligible_by_size() {
        let grid = SlotGrid::default();

        let small = grid.find_eligible(SizeClass::Small);
        let medium = grid.find_eligible(SizeClass::Medium);
        let large = grid.find_eligible(SizeClass::Large);

        assert_eq!(small.len(), 21);
        assert!(medium.iter().all(|s| s.size() >= SizeClass::Medium));
        assert!(large.iter().all(|s| s.size() == SizeClass::Large));
        assert_eq!(large.len(), 6);
        assert!(small.iter().all(|s| !s.is_road()));
    }

    #[test]
    fn test_find_eligible_skips_taken_slots() {
        let mut grid = SlotGrid::default();
        grid.occupy(Position::new(4, 0), "P01").unwrap();

        let large = grid.find_eligible(SizeClass::Large);

        assert_eq!(large.len(), 5);
        assert!(large.iter().all(|s| s.position() != Position::new(4, 0)));
    }

    #[test]
    fn test_occupy_then_release_restores_slot() {
        let mut grid = SlotGrid::default();
        let position = Position::new(2, 2);

        let slot = grid.occupy(position, "P07").unwrap();
        assert_eq!(slot.kind(), SlotKind::Vacant);
        assert_eq!(slot.occupant_plate(), Some("P07"));
        assert_eq!(grid.slot_of("P07").unwrap().position(), position);

        let released = grid.release("P07").unwrap();
        assert_eq!(released.position(), position);
        assert_eq!(released.kind(), SlotKind::Open);
        assert!(released.occupant_plate().is_none());
        assert!(grid.slot_of("P07").is_none());
    }

    #[test]
    fn test_occupy_rejects_road_and_taken_slots() {
        let mut grid = SlotGrid::default();

        assert_eq!(
            grid.occupy(Position::new(0, 1), "P01").unwrap_err(),
            ParkingError::SlotNotFound
        );

        grid.occupy(Position::new(0, 0), "P01").unwrap();
        assert_eq!(
            grid.occupy(Position::new(0, 0), "P02").unwrap_err(),
            ParkingError::SlotNotFound
        );
        assert_eq!(grid.get(Position::new(0, 0)).unwrap().occupant_plate(), Some("P01"));
    }

    #[test]
    fn test_release_unknown_plate() {
        let mut grid = SlotGrid::default();

        assert_eq!(grid.release("P99").unwrap_err(), ParkingError::SlotNotFound);
    }

    #[test]
    fn test_custom_layout() {
        let grid = SlotGrid::from_layout(&[vec![LayoutCell::Road, LayoutCell::Slot(SizeClass::Medium)]]);

        assert_eq!(grid.slots().len(), 2);
        assert_eq!(grid.find_eligible(SizeClass::Small).len(), 1);
        assert_eq!(grid.find_eligible(SizeClass::Large).len(), 0);
    }
}
