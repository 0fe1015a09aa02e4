//! Dashboard search endpoint tests.
//!
//! # Invariants
//! - The query travels as the URL-encoded `query` parameter
//! - Hits keep server order and folders are not filtered at this layer
//! - Malformed bodies decode to an empty list unless strict decoding is on

mod common;

use common::*;
use grafana_config::DecodeMode;
use wiremock::matchers::{header, method, path, query_param};

#[tokio::test]
async fn test_search_sends_query_parameter() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("search/mixed_hits.json");

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("query", "%"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let hits = endpoints::search_dashboards(
        &client,
        &api_base(&mock_server),
        TEST_TOKEN,
        "%",
        DecodeMode::Lenient,
    )
    .await
    .unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].uid, "abc");
    assert_eq!(hits[0].kind, "dash-db");
    assert_eq!(hits[0].folder_title, "Operations");
    assert!(hits[1].is_folder());
}

#[tokio::test]
async fn test_search_encodes_special_characters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("query", "cpu & memory"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let hits = default_client(&mock_server)
        .search_dashboards("cpu & memory")
        .await
        .unwrap();

    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_search_lenient_malformed_body_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let hits = default_client(&mock_server)
        .search_dashboards("%")
        .await
        .unwrap();

    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_search_strict_malformed_body_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"not":"a list"}"#))
        .mount(&mock_server)
        .await;

    let search = grafana_config::SearchConfig {
        decode_mode: DecodeMode::Strict,
        ..Default::default()
    };
    let err = client_for(&mock_server, search)
        .search_dashboards("%")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_search_tolerates_null_and_missing_fields() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("search/ordered_hits.json");

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let hits = default_client(&mock_server)
        .search_dashboards("%")
        .await
        .unwrap();

    assert_eq!(hits.len(), 5);
    assert!(hits[3].tags.is_empty());
    assert_eq!(hits[3].folder_title, "");
}
