//! Integration tests for structured exit codes.

mod common;

use common::{grafana_cmd, grafana_cmd_for};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_answering(status: u16, endpoint: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(serde_json::json!({"message": "nope"})),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_unauthorized_returns_exit_code_2() {
    let server = server_answering(401, "/api/user").await;
    grafana_cmd_for(&server).arg("user").assert().code(2);
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    grafana_cmd()
        .env("GRAFANA_URL", "http://127.0.0.1:1/api")
        .arg("user")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("get_user"));
}

#[tokio::test]
async fn test_unknown_dashboard_returns_exit_code_4() {
    let server = server_answering(404, "/api/dashboards/uid/missing").await;
    grafana_cmd_for(&server)
        .arg("missing")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("get_dashboard [missing]"));
}

#[tokio::test]
async fn test_invalid_uid_returns_exit_code_5_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&server)
        .await;

    grafana_cmd_for(&server).arg("..%2Fuser").assert().code(5);
}

#[tokio::test]
async fn test_strict_malformed_search_returns_exit_code_5() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    grafana_cmd_for(&server)
        .args(["--strict", "search"])
        .assert()
        .code(5);
}

#[tokio::test]
async fn test_forbidden_returns_exit_code_6() {
    let server = server_answering(403, "/api/search").await;
    grafana_cmd_for(&server).arg("search").assert().code(6);
}

#[tokio::test]
async fn test_bad_gateway_returns_exit_code_8() {
    let server = server_answering(502, "/api/user").await;
    grafana_cmd_for(&server).assert().code(8);
}

#[test]
fn test_invalid_base_url_returns_exit_code_1() {
    grafana_cmd()
        .env("GRAFANA_URL", "ftp://grafana.example.com/api")
        .arg("user")
        .assert()
        .code(1);
}
