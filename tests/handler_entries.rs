mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_entry_assigns_nearest_slot() {
    let server = common::create_test_server();

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("S", "A", "P01", "2022-08-31T01:00"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["plate_number"], "P01");
    assert_eq!(json["slot"]["x"], 0);
    assert_eq!(json["slot"]["y"], 0);
    assert_eq!(json["slot_size"], "S");
    assert_eq!(json["distance"], 1);
    assert_eq!(json["merged"], false);
    assert_eq!(json["message"], "Vehicle P01 parked at slot (0, 0)");
}

#[tokio::test]
async fn test_entry_respects_size_and_entrance() {
    let server = common::create_test_server();

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("L", "B", "P02", "2022-08-31T01:00"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["slot"]["x"], 6);
    assert_eq!(json["slot"]["y"], 2);
    assert_eq!(json["slot_size"], "L");

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("m", "a", "P03", "2022-08-31T01:00"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["slot"]["x"], 0);
    assert_eq!(json["slot"]["y"], 2);
    assert_eq!(json["slot_size"], "L");
}

#[tokio::test]
async fn test_entry_missing_field() {
    let server = common::create_test_server();

    let response = server
        .post("/api/entries")
        .json(&json!({
            "car_size": "S",
            "entrance": "A",
            "start": "2022-08-31T01:00"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Missing car entry input");
    assert_eq!(json["error"]["details"]["kind"], "missing_field");
}

#[tokio::test]
async fn test_entry_blank_field_counts_as_missing() {
    let server = common::create_test_server();

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("S", "A", "P01", "  "))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Missing car entry input");
}

#[tokio::test]
async fn test_entry_invalid_values() {
    let server = common::create_test_server();

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("XL", "A", "P01", "2022-08-31T01:00"))
        .await;
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "car_size");

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("S", "D", "P01", "2022-08-31T01:00"))
        .await;
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "entrance");

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("S", "A", "P 01", "2022-08-31T01:00"))
        .await;
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["fields"][0], "plate_number");

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("S", "A", "P01", "31/08/2022 01:00"))
        .await;
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["field"], "start");
}

#[tokio::test]
async fn test_entry_already_parked() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("S", "C", "P01", "2022-08-31T02:00"))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "The vehicle is currently parked");
    assert_eq!(json["error"]["details"]["kind"], "vehicle_already_parked");

    let slots = server.get("/api/slots").await.json::<serde_json::Value>();
    assert_eq!(slots["occupancy"]["vacant"], 1);
}

#[tokio::test]
async fn test_entry_no_slot_available() {
    let server = common::create_test_server();

    for n in 1..=6 {
        common::park(&server, "L", "A", &format!("L{n:02}"), "2022-08-31T01:00").await;
    }

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("L", "B", "L07", "2022-08-31T01:00"))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "No available slot for this vehicle");
    assert_eq!(json["error"]["details"]["kind"], "no_slot_available");

    let ledger = server
        .get("/api/transactions")
        .await
        .json::<serde_json::Value>();
    assert_eq!(ledger["total"], 6);
}

#[tokio::test]
async fn test_entry_time_travel() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;
    common::leave(&server, "P01", "2022-08-31T03:00").await;

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("S", "A", "P01", "2022-08-31T02:00"))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["kind"], "time_travel");
}

#[tokio::test]
async fn test_reentry_within_grace_window_continues_stay() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;
    let exit = common::leave(&server, "P01", "2022-08-31T02:00").await;
    assert_eq!(exit["payment"], 40);

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("S", "A", "P01", "2022-08-31T02:30"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["merged"], true);

    let ledger = server
        .get("/api/transactions")
        .await
        .json::<serde_json::Value>();
    assert_eq!(ledger["total"], 1);
    assert_eq!(ledger["items"][0]["status"], "parking");

    let exit = common::leave(&server, "P01", "2022-08-31T08:00").await;
    assert_eq!(exit["start"], "2022-08-31T01:00");
    assert_eq!(exit["hours"], 7);
    assert_eq!(exit["payment"], 120);
}

#[tokio::test]
async fn test_reentry_after_grace_window_appends() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;
    common::leave(&server, "P01", "2022-08-31T02:00").await;

    let response = server
        .post("/api/entries")
        .json(&common::entry_body("S", "A", "P01", "2022-08-31T03:30"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["merged"], false);

    let ledger = server
        .get("/api/transactions")
        .await
        .json::<serde_json::Value>();
    assert_eq!(ledger["total"], 2);
    assert_eq!(ledger["items"][0]["start"], "2022-08-31T03:30");
    assert_eq!(ledger["items"][1]["status"], "closed");
}
