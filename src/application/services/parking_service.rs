//! Entry/exit orchestration over the shared facility.

use metrics::counter;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::entities::{Slot, Transaction};
use crate::domain::{
    EntryReceipt, EntryRequest, ExitReceipt, ExitRequest, Facility, Occupancy, ParkingError,
};
use crate::error::AppError;

/// Service owning the one [`Facility`] of the process.
///
/// Requests are serialized through an async mutex: each entry or exit holds
/// the lock for its whole run, so the core never sees interleaved requests.
pub struct ParkingService {
    facility: Mutex<Facility>,
}

impl ParkingService {
    /// Creates a new parking service around `facility`.
    pub fn new(facility: Facility) -> Self {
        Self {
            facility: Mutex::new(facility),
        }
    }

    /// Parks a vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing input or a start before a
    /// recorded exit, [`AppError::Conflict`] when the vehicle is already
    /// parked or no slot fits it.
    pub async fn submit_entry(&self, request: EntryRequest) -> Result<EntryReceipt, AppError> {
        let plate = request.plate_number.clone();
        let car_size = request.car_size;
        let entrance = request.entrance;

        let result = self.facility.lock().await.submit_entry(request);

        match result {
            Ok(receipt) => {
                info!(
                    plate = %receipt.plate_number,
                    size = %car_size,
                    entrance = %entrance,
                    slot = %receipt.slot,
                    merged = receipt.merged,
                    "Vehicle parked"
                );
                counter!("parking_entries_total", "size" => car_size.code()).increment(1);
                Ok(receipt)
            }
            Err(err) => Err(rejected("entry", &plate, err)),
        }
    }

    /// Releases a vehicle and records its payment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vehicle is not parked,
    /// [`AppError::Validation`] for missing input or an end before the start.
    pub async fn submit_exit(&self, request: ExitRequest) -> Result<ExitReceipt, AppError> {
        let plate = request.plate_number.clone();

        let result = self.facility.lock().await.submit_exit(request);

        match result {
            Ok(receipt) => {
                info!(
                    plate = %receipt.transaction.plate_number,
                    slot = %receipt.slot,
                    payment = receipt.transaction.payment,
                    "Vehicle left"
                );
                counter!("parking_exits_total").increment(1);
                counter!("parking_revenue_total").increment(receipt.transaction.payment);
                Ok(receipt)
            }
            Err(err) => Err(rejected("exit", &plate, err)),
        }
    }

    /// Copy of the grid in layout order.
    pub async fn slots(&self) -> Vec<Slot> {
        self.facility.lock().await.slots().to_vec()
    }

    /// Copy of the ledger, newest first, optionally limited to one plate.
    pub async fn transactions(&self, plate: Option<&str>) -> Vec<Transaction> {
        let facility = self.facility.lock().await;
        match plate {
            Some(plate) => facility.ledger().history(plate).cloned().collect(),
            None => facility.transactions().to_vec(),
        }
    }

    pub async fn occupancy(&self) -> Occupancy {
        self.facility.lock().await.occupancy()
    }

    /// Grid and ledger taken under one lock, for views that show both.
    pub async fn snapshot(&self) -> (Vec<Slot>, Vec<Transaction>, Occupancy) {
        let facility = self.facility.lock().await;
        (
            facility.slots().to_vec(),
            facility.transactions().to_vec(),
            facility.occupancy(),
        )
    }
}

impl Default for ParkingService {
    fn default() -> Self {
        Self::new(Facility::default())
    }
}

fn rejected(request: &'static str, plate: &str, err: ParkingError) -> AppError {
    warn!(request, plate, reason = err.kind(), "{}", err);
    counter!("parking_rejections_total", "reason" => err.kind()).increment(1);
    err.into()
}
