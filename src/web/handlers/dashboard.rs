//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::Occupancy;
use crate::domain::entities::{Slot, SlotKind, Transaction};
use crate::state::AppState;
use crate::utils::timestamp::format_timestamp;

/// One rendered grid cell.
pub struct CellView {
    /// `bg-green` (open), `bg-red` (vacant) or `bg-gray` (road).
    pub class: &'static str,
    /// `"<size> | <plate>"`, `000` in place of a missing plate; empty for road.
    pub label: String,
    pub position: String,
}

impl From<&Slot> for CellView {
    fn from(slot: &Slot) -> Self {
        let class = match slot.kind() {
            SlotKind::Open => "bg-green",
            SlotKind::Vacant => "bg-red",
            SlotKind::Road => "bg-gray",
        };

        let label = if slot.is_road() {
            String::new()
        } else {
            format!("{} | {}", slot.size(), slot.occupant_plate().unwrap_or("000"))
        };

        Self {
            class,
            label,
            position: slot.position().to_string(),
        }
    }
}

/// Formats a ledger entry as `plate | start | end | payment`.
///
/// Open stays show `parking` in place of both end and payment.
pub fn history_line(tx: &Transaction) -> String {
    match tx.end {
        Some(end) => format!(
            "{} | {} | {} | ₱{}",
            tx.plate_number,
            format_timestamp(tx.start),
            format_timestamp(end),
            tx.payment
        ),
        None => format!(
            "{} | {} | parking | parking",
            tx.plate_number,
            format_timestamp(tx.start)
        ),
    }
}

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html`: legend, grid rows and parking history.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// Grid width, drives `grid-template-columns`.
    pub columns: usize,
    pub rows: Vec<Vec<CellView>>,
    pub history: Vec<String>,
    pub occupancy: Occupancy,
}

impl DashboardTemplate {
    pub fn new(slots: &[Slot], transactions: &[Transaction], occupancy: Occupancy) -> Self {
        let rows = slots
            .chunk_by(|a, b| a.position().y == b.position().y)
            .map(|row| row.iter().map(CellView::from).collect())
            .collect();

        let columns = slots
            .iter()
            .map(|slot| slot.position().x as usize + 1)
            .max()
            .unwrap_or(1);

        Self {
            columns,
            rows,
            history: transactions.iter().map(history_line).collect(),
            occupancy,
        }
    }
}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (slots, transactions, occupancy) = state.parking_service.snapshot().await;

    DashboardTemplate::new(&slots, &transactions, occupancy)
}
