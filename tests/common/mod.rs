#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use parking_facility::api::handlers::health_handler;
use parking_facility::api::routes::api_routes;
use parking_facility::domain::Facility;
use parking_facility::state::AppState;
use parking_facility::web::routes::dashboard_routes;
use serde_json::{Value, json};

pub fn create_test_state() -> AppState {
    AppState::with_facility(Facility::default())
}

/// Router with every endpoint mounted the way the service mounts them.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .nest("/dashboard", dashboard_routes())
        .with_state(state)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app(create_test_state())).unwrap()
}

pub fn entry_body(car_size: &str, entrance: &str, plate: &str, start: &str) -> Value {
    json!({
        "car_size": car_size,
        "entrance": entrance,
        "plate_number": plate,
        "start": start
    })
}

pub fn exit_body(plate: &str, end: &str) -> Value {
    json!({
        "plate_number": plate,
        "end": end
    })
}

pub async fn park(server: &TestServer, car_size: &str, entrance: &str, plate: &str, start: &str) {
    server
        .post("/api/entries")
        .json(&entry_body(car_size, entrance, plate, start))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}

pub async fn leave(server: &TestServer, plate: &str, end: &str) -> Value {
    let response = server.post("/api/exits").json(&exit_body(plate, end)).await;
    response.assert_status_ok();
    response.json::<Value>()
}
