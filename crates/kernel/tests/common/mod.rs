#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Builds a [`TestApp`] on the REAL kernel router and state, so tests verify
//! actual behavior rather than mock implementations.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use portal_kernel::{AppState, Config, nav, routes};

/// Test application wrapper using the real kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Build a test app against a fixed example configuration.
    pub fn new() -> Self {
        let config = Config {
            port: 3000,
            app_url: "https://example.com".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
        };

        let state = AppState::new(config, nav::base_navigation()).unwrap();
        let router = routes::router(state.clone());

        Self { router, state }
    }

    /// Perform a GET request against the router.
    pub async fn get(&self, uri: &str) -> Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Read a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
