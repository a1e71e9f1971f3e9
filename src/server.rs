//! HTTP server initialization and runtime setup.
//!
//! Builds the facility with the default layout and tariff, then runs the Axum
//! server until Ctrl-C.

use crate::config::Config;
use crate::domain::Facility;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let facility = Facility::default();
    let occupancy = facility.occupancy();
    tracing::info!(
        open = occupancy.open,
        road = occupancy.road,
        "Facility ready"
    );

    let state = AppState::with_facility(facility);

    let app = app_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
    }
}
