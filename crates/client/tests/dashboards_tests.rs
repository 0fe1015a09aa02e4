//! Single-dashboard endpoint tests.
//!
//! # Invariants
//! - Documents are fetched from `dashboards/uid/<uid>` and returned verbatim
//! - Invalid uids are rejected before any request is sent

mod common;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_get_dashboard_returns_raw_document() {
    let mock_server = MockServer::start().await;
    let raw = r#"{"dashboard": {"description": "hello"}}"#;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(raw))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let body = endpoints::get_dashboard(&client, &api_base(&mock_server), TEST_TOKEN, "abc")
        .await
        .unwrap();

    assert_eq!(body, raw);
}

#[tokio::test]
async fn test_dashboard_description_from_fixture() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("dashboards/abc.json");

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let description = default_client(&mock_server)
        .dashboard_description("abc")
        .await
        .unwrap();

    assert_eq!(description, "hello");
}

#[tokio::test]
async fn test_get_dashboard_rejects_invalid_uid_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = default_client(&mock_server);
    for uid in ["", "../user", "a/b", "has space", "query?x=1"] {
        let err = client.get_dashboard(uid).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidUid(_)), "uid {uid:?}");
    }
}

#[tokio::test]
async fn test_get_dashboard_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"message": "Dashboard not found"})),
        )
        .mount(&mock_server)
        .await;

    let err = default_client(&mock_server)
        .get_dashboard("missing")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Dashboard not found"));
}
