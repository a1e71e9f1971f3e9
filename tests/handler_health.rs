mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["occupancy"]["open"], 21);
}

#[tokio::test]
async fn test_health_reports_occupancy() {
    let server = common::create_test_server();
    common::park(&server, "M", "B", "P01", "2022-08-31T01:00").await;

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["occupancy"]["open"], 20);
    assert_eq!(json["occupancy"]["vacant"], 1);
    assert_eq!(json["occupancy"]["road"], 12);
}
