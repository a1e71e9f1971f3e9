//! DTOs for the vehicle exit endpoint.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::fee::billable_hours;
use crate::domain::{ExitReceipt, ExitRequest, ParkingError, RequestKind};
use crate::error::AppError;
use crate::utils::timestamp::{format_timestamp, parse_timestamp};

use super::entry::{PLATE_NUMBER_REGEX, present};
use super::slot::SlotPosition;

/// Request to release a parked vehicle.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ExitPayload {
    #[validate(length(min = 1, max = 16), regex(path = *PLATE_NUMBER_REGEX))]
    pub plate_number: Option<String>,

    /// Departure time, `YYYY-MM-DDTHH:MM`.
    pub end: Option<String>,
}

impl ExitPayload {
    /// Checks the payload and converts it into a domain request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a field is missing or blank,
    /// the plate number is malformed, or the end time cannot be parsed.
    pub fn into_request(self) -> Result<ExitRequest, AppError> {
        let (Some(plate_number), Some(end)) = (present(&self.plate_number), present(&self.end))
        else {
            return Err(ParkingError::MissingField(RequestKind::Exit).into());
        };

        self.validate()?;

        let end = parse_timestamp(end)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "field": "end" })))?;

        Ok(ExitRequest {
            plate_number: plate_number.to_string(),
            end,
        })
    }
}

/// Response after a vehicle has left, carrying the closed transaction.
#[derive(Debug, Serialize)]
pub struct ExitResponse {
    pub plate_number: String,
    pub slot: SlotPosition,
    pub slot_size: String,
    pub start: String,
    pub end: String,
    /// Billed hours, rounded to the nearest hour.
    pub hours: u64,
    pub payment: u64,
}

impl From<ExitReceipt> for ExitResponse {
    fn from(receipt: ExitReceipt) -> Self {
        let tx = receipt.transaction;
        let end = tx.end.unwrap_or(tx.start);

        Self {
            plate_number: tx.plate_number,
            slot: receipt.slot.into(),
            slot_size: receipt.slot_size.to_string(),
            start: format_timestamp(tx.start),
            end: format_timestamp(end),
            hours: billable_hours(tx.start, end),
            payment: tx.payment,
        }
    }
}
