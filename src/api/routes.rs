//! API route configuration.

use crate::api::handlers::{entry_handler, exit_handler, slots_handler, transactions_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /entries`       - Park a vehicle
/// - `POST /exits`         - Release a vehicle and charge for the stay
/// - `GET  /slots`         - Grid snapshot with occupancy counts
/// - `GET  /transactions`  - Ledger, newest first (paginated, `?plate=` filter)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/entries", post(entry_handler))
        .route("/exits", post(exit_handler))
        .route("/slots", get(slots_handler))
        .route("/transactions", get(transactions_handler))
}
