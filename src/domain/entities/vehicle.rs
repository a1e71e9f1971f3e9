//! Value types shared by slots, vehicles and entrances.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Size class of a vehicle or a parking slot.
///
/// Ordered `Small < Medium < Large`: a vehicle fits any slot of its own
/// class or larger, never a smaller one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Returns true if a vehicle of this class may park in a `slot` sized slot.
    pub fn fits_in(self, slot: SizeClass) -> bool {
        self <= slot
    }

    /// Single-letter code used on the wire and in the grid view.
    pub fn code(self) -> &'static str {
        match self {
            SizeClass::Small => "S",
            SizeClass::Medium => "M",
            SizeClass::Large => "L",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SizeClass {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" | "SMALL" => Ok(SizeClass::Small),
            "M" | "MEDIUM" => Ok(SizeClass::Medium),
            "L" | "LARGE" => Ok(SizeClass::Large),
            _ => Err(ParseValueError::SizeClass(s.to_string())),
        }
    }
}

/// One of the facility's three entrances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entrance {
    /// Left side.
    A,
    /// Top side.
    B,
    /// Right side.
    C,
}

impl Entrance {
    pub const ALL: [Entrance; 3] = [Entrance::A, Entrance::B, Entrance::C];
}

impl fmt::Display for Entrance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Entrance::A => "A",
            Entrance::B => "B",
            Entrance::C => "C",
        };
        f.write_str(letter)
    }
}

impl FromStr for Entrance {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Entrance::A),
            "B" => Ok(Entrance::B),
            "C" => Ok(Entrance::C),
            _ => Err(ParseValueError::Entrance(s.to_string())),
        }
    }
}

/// Grid coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Failure to parse a size class or entrance from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("Unknown car size '{0}', expected S, M or L")]
    SizeClass(String),
    #[error("Unknown entrance '{0}', expected A, B or C")]
    Entrance(String),
}
