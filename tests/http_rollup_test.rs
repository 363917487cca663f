mod common;

use budget_rollup::domain::ports::Rollup;
use budget_rollup::domain::rollup::{FinishStatus, RollupRequest};
use budget_rollup::error::BudgetError;
use budget_rollup::infrastructure::http::HttpRollup;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpRollup {
    HttpRollup::new(Url::parse(&server.uri()).unwrap())
}

#[tokio::test]
async fn test_finish_without_pending_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/finish"))
        .and(body_json(json!({"status": "accept"})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let request = client(&server).finish(FinishStatus::Accept).await.unwrap();
    assert!(request.is_none());
}

#[tokio::test]
async fn test_finish_returns_pending_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/finish"))
        .and(body_json(json!({"status": "reject"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::inspect_request("listAllBudgets")),
        )
        .mount(&server)
        .await;

    let request = client(&server).finish(FinishStatus::Reject).await.unwrap();
    assert!(matches!(request, Some(RollupRequest::InspectState(_))));
}

#[tokio::test]
async fn test_finish_with_unknown_request_type_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/finish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_type": "mystery_state",
            "data": {"payload": "0x"}
        })))
        .mount(&server)
        .await;

    let result = client(&server).finish(FinishStatus::Accept).await;
    assert!(matches!(result, Err(BudgetError::Coordinator(_))));
}

#[tokio::test]
async fn test_finish_server_error_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/finish"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client(&server).finish(FinishStatus::Accept).await;
    assert!(matches!(result, Err(BudgetError::Coordinator(_))));
}

#[tokio::test]
async fn test_notice_and_report_post_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notice"))
        .and(body_json(json!({"payload": "0x7b7d"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/report"))
        .and(body_json(json!({"payload": "0x5b5d"})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let rollup = client(&server);
    rollup.add_notice("0x7b7d").await.unwrap();
    rollup.add_report("0x5b5d").await.unwrap();
}

#[tokio::test]
async fn test_rejected_output_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notice"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let result = client(&server).add_notice("0x").await;
    assert!(matches!(result, Err(BudgetError::Coordinator(_))));
}

#[tokio::test]
async fn test_unreachable_coordinator_is_an_http_error() {
    // Nothing listens on the discard port.
    let rollup = HttpRollup::new(Url::parse("http://127.0.0.1:9").unwrap());
    let result = rollup.finish(FinishStatus::Accept).await;
    assert!(matches!(result, Err(BudgetError::Http(_))));
}
