use std::sync::Arc;

use crate::application::services::ParkingService;
use crate::domain::Facility;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub parking_service: Arc<ParkingService>,
}

impl AppState {
    pub fn new(parking_service: Arc<ParkingService>) -> Self {
        Self { parking_service }
    }

    /// State around a freshly laid out facility.
    pub fn with_facility(facility: Facility) -> Self {
        Self::new(Arc::new(ParkingService::new(facility)))
    }
}
