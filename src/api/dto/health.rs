//! DTOs for health check endpoint.

use serde::Serialize;

use super::slot::OccupancyResponse;

/// Health check response with current occupancy.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub occupancy: OccupancyResponse,
}
