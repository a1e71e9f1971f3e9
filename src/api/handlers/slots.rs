//! Handler for the slot grid snapshot.

use axum::{Json, extract::State};

use crate::api::dto::slot::{SlotResponse, SlotsResponse};
use crate::state::AppState;

/// Returns every grid cell in layout order with occupancy counts.
///
/// # Endpoint
///
/// `GET /api/slots`
///
/// # Response
///
/// ```json
/// {
///   "occupancy": { "open": 20, "vacant": 1, "road": 12 },
///   "slots": [
///     { "x": 0, "y": 0, "size": "S", "status": "vacant", "plate_number": "P01" },
///     { "x": 1, "y": 0, "size": "S", "status": "open" }
///   ]
/// }
/// ```
pub async fn slots_handler(State(state): State<AppState>) -> Json<SlotsResponse> {
    let (slots, _, occupancy) = state.parking_service.snapshot().await;

    Json(SlotsResponse {
        occupancy: occupancy.into(),
        slots: slots.iter().map(SlotResponse::from).collect(),
    })
}
