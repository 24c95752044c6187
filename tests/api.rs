//! Smoke tests for the /api greeting and the generated OpenAPI document.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use product_api::{app, AppState, MemoryStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState {
        store: Arc::new(MemoryStore::new()),
    })
}

#[tokio::test]
async fn api_root_sends_back_a_json_response() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.contains("json"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["msg"], "Desde API");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["info"]["description"], "API Docs for Products");
    assert!(body["paths"].get("/api/products").is_some());
}
