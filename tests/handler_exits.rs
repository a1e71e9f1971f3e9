mod common;

use serde_json::json;

#[tokio::test]
async fn test_exit_charges_flat_rate_then_hourly() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;

    let response = server
        .post("/api/exits")
        .json(&common::exit_body("P01", "2022-08-31T06:00"))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["plate_number"], "P01");
    assert_eq!(json["slot"]["x"], 0);
    assert_eq!(json["slot"]["y"], 0);
    assert_eq!(json["slot_size"], "S");
    assert_eq!(json["start"], "2022-08-31T01:00");
    assert_eq!(json["end"], "2022-08-31T06:00");
    assert_eq!(json["hours"], 5);
    assert_eq!(json["payment"], 80);
}

#[tokio::test]
async fn test_exit_within_flat_period() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;

    let json = common::leave(&server, "P01", "2022-08-31T03:00").await;

    assert_eq!(json["hours"], 2);
    assert_eq!(json["payment"], 40);
}

#[tokio::test]
async fn test_exit_bills_by_slot_size() {
    let server = common::create_test_server();
    common::park(&server, "L", "B", "P02", "2022-08-31T01:00").await;

    let json = common::leave(&server, "P02", "2022-08-31T06:00").await;

    assert_eq!(json["slot_size"], "L");
    assert_eq!(json["payment"], 240);
}

#[tokio::test]
async fn test_exit_after_a_full_day() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;

    let json = common::leave(&server, "P01", "2022-09-01T02:00").await;

    assert_eq!(json["hours"], 25);
    assert_eq!(json["payment"], 5020);
}

#[tokio::test]
async fn test_exit_rounds_to_nearest_hour() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;

    let json = common::leave(&server, "P01", "2022-08-31T04:30").await;

    assert_eq!(json["hours"], 4);
    assert_eq!(json["payment"], 60);
}

#[tokio::test]
async fn test_exit_frees_the_slot() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;
    common::leave(&server, "P01", "2022-08-31T02:00").await;

    let json = server.get("/api/slots").await.json::<serde_json::Value>();

    assert_eq!(json["occupancy"]["vacant"], 0);
    assert_eq!(json["slots"][0]["status"], "open");
    assert!(json["slots"][0].get("plate_number").is_none());
}

#[tokio::test]
async fn test_exit_vehicle_not_found() {
    let server = common::create_test_server();

    let response = server
        .post("/api/exits")
        .json(&common::exit_body("P09", "2022-08-31T06:00"))
        .await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(
        json["error"]["message"],
        "The vehicle does not exist in the parking lot"
    );
}

#[tokio::test]
async fn test_exit_twice_is_not_found() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T01:00").await;
    common::leave(&server, "P01", "2022-08-31T02:00").await;

    let response = server
        .post("/api/exits")
        .json(&common::exit_body("P01", "2022-08-31T03:00"))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_exit_end_not_after_start() {
    let server = common::create_test_server();
    common::park(&server, "S", "A", "P01", "2022-08-31T05:00").await;

    let response = server
        .post("/api/exits")
        .json(&common::exit_body("P01", "2022-08-31T05:00"))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "The end time should be greater than the start time"
    );
    assert_eq!(json["error"]["details"]["kind"], "invalid_time_range");

    let slots = server.get("/api/slots").await.json::<serde_json::Value>();
    assert_eq!(slots["occupancy"]["vacant"], 1);
}

#[tokio::test]
async fn test_exit_missing_field() {
    let server = common::create_test_server();

    let response = server
        .post("/api/exits")
        .json(&json!({ "plate_number": "P01" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Missing car exit input");
}
