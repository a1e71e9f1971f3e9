//! DTOs for the vehicle entry endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Entrance, ParseValueError, SizeClass};
use crate::domain::{EntryReceipt, EntryRequest, ParkingError, RequestKind};
use crate::error::AppError;
use crate::utils::timestamp::parse_timestamp;

use super::slot::SlotPosition;

/// Compiled regex for plate number validation.
pub static PLATE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

/// Request to park a vehicle.
///
/// Every field is optional on the wire so that an absent or blank field is
/// reported as a missing-input failure rather than a JSON rejection.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EntryPayload {
    /// `S`, `M` or `L`.
    pub car_size: Option<String>,

    /// `A`, `B` or `C`.
    pub entrance: Option<String>,

    #[validate(length(min = 1, max = 16), regex(path = *PLATE_NUMBER_REGEX))]
    pub plate_number: Option<String>,

    /// Arrival time, `YYYY-MM-DDTHH:MM`.
    pub start: Option<String>,
}

impl EntryPayload {
    /// Checks the payload and converts it into a domain request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a field is missing or blank
    /// (with the missing-input message), when the plate number is malformed,
    /// or when a value cannot be parsed.
    pub fn into_request(self) -> Result<EntryRequest, AppError> {
        let (Some(car_size), Some(entrance), Some(plate_number), Some(start)) = (
            present(&self.car_size),
            present(&self.entrance),
            present(&self.plate_number),
            present(&self.start),
        ) else {
            return Err(ParkingError::MissingField(RequestKind::Entry).into());
        };

        self.validate()?;

        let car_size: SizeClass = car_size
            .parse()
            .map_err(|e: ParseValueError| {
                AppError::bad_request(e.to_string(), json!({ "field": "car_size" }))
            })?;
        let entrance: Entrance = entrance
            .parse()
            .map_err(|e: ParseValueError| {
                AppError::bad_request(e.to_string(), json!({ "field": "entrance" }))
            })?;
        let start = parse_timestamp(start)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "field": "start" })))?;

        Ok(EntryRequest {
            car_size,
            entrance,
            plate_number: plate_number.to_string(),
            start,
        })
    }
}

/// Returns the value if it is present and not blank.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Response after a vehicle has been parked.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub plate_number: String,
    pub slot: SlotPosition,
    pub slot_size: String,
    pub distance: i32,
    /// True when the entry continued a stay closed less than an hour ago.
    pub merged: bool,
    pub message: String,
}

impl From<EntryReceipt> for EntryResponse {
    fn from(receipt: EntryReceipt) -> Self {
        let message = if receipt.merged {
            format!(
                "Vehicle {} returned within the grace window and was parked at slot {}",
                receipt.plate_number, receipt.slot
            )
        } else {
            format!(
                "Vehicle {} parked at slot {}",
                receipt.plate_number, receipt.slot
            )
        };

        Self {
            plate_number: receipt.plate_number,
            slot: receipt.slot.into(),
            slot_size: receipt.slot_size.to_string(),
            distance: receipt.distance,
            merged: receipt.merged,
            message,
        }
    }
}
