//! Validation failures raised by the parking core.

use std::fmt;

use thiserror::Error;

/// Which request a missing-field failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Entry,
    Exit,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Entry => f.write_str("entry"),
            RequestKind::Exit => f.write_str("exit"),
        }
    }
}

/// Every way an entry or exit request can be rejected.
///
/// All variants are recoverable and carry a fixed, user-facing message. A
/// request that fails leaves the slot grid and the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingError {
    #[error("Missing car {0} input")]
    MissingField(RequestKind),

    #[error("No available slot for this vehicle")]
    NoSlotAvailable,

    #[error("The vehicle is currently parked")]
    VehicleAlreadyParked,

    #[error(
        "You cannot travel back to time, the start date must be greater than the recorded end date transaction of the vehicle"
    )]
    TimeTravel,

    #[error("The vehicle does not exist in the parking lot")]
    VehicleNotFound,

    #[error("The end time should be greater than the start time")]
    InvalidTimeRange,

    #[error("No parking slot is assigned to this vehicle")]
    SlotNotFound,
}

impl ParkingError {
    /// Stable snake_case identifier, used in API error details and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ParkingError::MissingField(_) => "missing_field",
            ParkingError::NoSlotAvailable => "no_slot_available",
            ParkingError::VehicleAlreadyParked => "vehicle_already_parked",
            ParkingError::TimeTravel => "time_travel",
            ParkingError::VehicleNotFound => "vehicle_not_found",
            ParkingError::InvalidTimeRange => "invalid_time_range",
            ParkingError::SlotNotFound => "slot_not_found",
        }
    }
}
