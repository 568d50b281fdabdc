// HTTP surface tests, driven through the router with `oneshot`

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{router, MockBackend};
use inference_gateway::config::AppConfig;
use inference_gateway::server::create_router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app(backend: Arc<MockBackend>) -> Router {
    create_router(AppConfig::default(), Arc::new(router(backend)))
}

fn chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_chat_returns_inference_result() {
    let backend = MockBackend::replying("hello");
    let response = app(backend.clone())
        .oneshot(chat(r#"{"message": "hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = json_body(response).await;
    assert_eq!(body["text"], "hello");
    assert_eq!(body["modelUsed"], "Gemini 3 Flash");
    assert_eq!(body["metrics"]["cached"], false);
    assert_eq!(body["metrics"]["cluster"], "EDGE-TPU-NODE");
    assert!(body["toolCalls"].as_array().unwrap().is_empty());
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_chat_boosted_with_throughput() {
    let backend = MockBackend::replying("deep answer");
    let response = app(backend.clone())
        .oneshot(chat(r#"{"message": "write a poem", "boosted": true, "throughput": 312.5}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["modelUsed"], "GPT-4o");
    assert_eq!(body["metrics"]["accelerated"], true);
    assert_eq!(body["metrics"]["throughput"], 312.5);
    assert_eq!(body["metrics"]["cluster"], "H100-DGX-CLUSTER");
}

#[tokio::test]
async fn test_chat_rejects_blank_message() {
    let backend = MockBackend::replying("unused");
    let response = app(backend.clone())
        .oneshot(chat(r#"{"message": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["type"], "error");
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_chat_rejects_malformed_json() {
    let backend = MockBackend::replying("unused");
    let response = app(backend.clone())
        .oneshot(chat(r#"{"msg": "hi""#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_chat_backend_failure_is_still_ok() {
    let response = app(MockBackend::failing())
        .oneshot(chat(r#"{"message": "hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["modelUsed"], "Fallback");
    assert_eq!(body["metrics"]["provider"], "System");
    assert_eq!(body["cost"], 0.0);
}

#[tokio::test]
async fn test_routes_lists_matrix() {
    let response = app(MockBackend::replying("x"))
        .oneshot(get("/v1/routes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let routes = body.as_array().unwrap();
    assert_eq!(routes.len(), 4);

    let ids: Vec<&str> = routes.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["claude-3-5-sonnet", "gpt-4o", "gemini-flash", "gpt-4o-mini"]);
    assert_eq!(routes[0]["backingModel"], "gemini-3-pro-preview");
}

#[tokio::test]
async fn test_health_reports_cache() {
    let response = app(MockBackend::replying("x"))
        .oneshot(get("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    // Default config carries no API key
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["backendConfigured"], false);
    assert_eq!(body["cacheEntries"], 0);
    assert_eq!(body["cacheCapacity"], 50);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = app(MockBackend::replying("x"));
    app.clone().oneshot(chat(r#"{"message": "hi"}"#)).await.unwrap();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("gateway_requests_total"));
    assert!(text.contains("backend_calls_total"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = app(MockBackend::replying("x"))
        .oneshot(get("/v1/unknown"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
