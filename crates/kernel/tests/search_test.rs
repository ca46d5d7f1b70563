#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the registry proxy routes.
//!
//! Only the request-validation paths are exercised here; proxied upstream
//! calls need a live registry.

mod common;

use axum::http::StatusCode;
use common::{TestApp, body_string};

#[tokio::test]
async fn search_without_query_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_string(response).await;
    assert!(body.contains("missing query parameter: q"));
}

#[tokio::test]
async fn search_with_blank_query_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/search?q=%20%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
