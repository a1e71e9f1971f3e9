//! Handler for the transaction ledger.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::transaction::{TransactionResponse, TransactionsQuery, TransactionsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists recorded stays, newest first.
///
/// # Endpoint
///
/// `GET /api/transactions`
///
/// # Query Parameters
///
/// - `plate` (optional): Only stays of this plate number
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 25, max: 100)
///
/// # Response
///
/// ```json
/// {
///   "total": 1,
///   "page": 1,
///   "page_size": 25,
///   "items": [
///     {
///       "plate_number": "P01",
///       "start": "2022-08-31T01:00",
///       "end": null,
///       "payment": 0,
///       "status": "parking"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn transactions_handler(
    State(state): State<AppState>,
    Query(params): Query<TransactionsQuery>,
) -> Result<Json<TransactionsResponse>, AppError> {
    let (offset, limit) = params
        .offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let plate = params
        .plate
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let transactions = state.parking_service.transactions(plate).await;

    let items = transactions
        .iter()
        .skip(offset)
        .take(limit)
        .map(TransactionResponse::from)
        .collect();

    Ok(Json(TransactionsResponse {
        total: transactions.len(),
        page: params.page.unwrap_or(1),
        page_size: params.page_size.unwrap_or(25),
        items,
    }))
}
