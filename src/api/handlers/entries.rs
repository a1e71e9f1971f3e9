//! Handler for vehicle entry endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::entry::{EntryPayload, EntryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Parks a vehicle in the nearest open slot that fits it.
///
/// # Endpoint
///
/// `POST /api/entries`
///
/// # Request Body
///
/// ```json
/// {
///   "car_size": "S",
///   "entrance": "A",
///   "plate_number": "P01",
///   "start": "2022-08-31T01:00"
/// }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// {
///   "plate_number": "P01",
///   "slot": { "x": 0, "y": 0 },
///   "slot_size": "S",
///   "distance": 1,
///   "merged": false,
///   "message": "Vehicle P01 parked at slot (0, 0)"
/// }
/// ```
///
/// `merged` is `true` when the vehicle came back within the grace window and
/// its previous stay was reopened.
///
/// # Errors
///
/// - **400 Bad Request**: missing input, malformed values, or a start before
///   the vehicle's last recorded exit
/// - **409 Conflict**: vehicle already parked, or no open slot fits it
pub async fn entry_handler(
    State(state): State<AppState>,
    Json(payload): Json<EntryPayload>,
) -> Result<(StatusCode, Json<EntryResponse>), AppError> {
    let request = payload.into_request()?;

    let receipt = state.parking_service.submit_entry(request).await?;

    Ok((StatusCode::CREATED, Json(receipt.into())))
}
