//! Crawler metadata routes: robots.txt and the sitemap.

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::metadata;
use crate::state::AppState;

/// Serve the robots policy in robots.txt form.
async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let policy = metadata::robots_policy(state.config());

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        policy.to_robots_txt(),
    )
}

/// Serve the sitemap derived from the navigation menu.
async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let body = metadata::sitemap_xml(state.config(), state.nav());

    ([(header::CONTENT_TYPE, "application/xml")], body)
}

/// Create the crawler metadata router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/robots.txt", get(robots_txt))
        .route("/sitemap.xml", get(sitemap_xml))
}
