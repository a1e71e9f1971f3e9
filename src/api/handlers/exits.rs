//! Handler for vehicle exit endpoint.

use axum::{Json, extract::State};

use crate::api::dto::exit::{ExitPayload, ExitResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Releases a parked vehicle and charges for the stay.
///
/// # Endpoint
///
/// `POST /api/exits`
///
/// # Request Body
///
/// ```json
/// { "plate_number": "P01", "end": "2022-08-31T06:00" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "plate_number": "P01",
///   "slot": { "x": 0, "y": 0 },
///   "slot_size": "S",
///   "start": "2022-08-31T01:00",
///   "end": "2022-08-31T06:00",
///   "hours": 5,
///   "payment": 80
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: missing input, malformed values, or an end time not
///   after the start
/// - **404 Not Found**: no parked vehicle with this plate
pub async fn exit_handler(
    State(state): State<AppState>,
    Json(payload): Json<ExitPayload>,
) -> Result<Json<ExitResponse>, AppError> {
    let request = payload.into_request()?;

    let receipt = state.parking_service.submit_exit(request).await?;

    Ok(Json(receipt.into()))
}
