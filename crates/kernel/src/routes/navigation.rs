//! Navigation menu API.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::nav::NavConfig;
use crate::state::AppState;

/// Serve the extended navigation menu consumed by the UI chrome.
async fn navigation(State(state): State<AppState>) -> Json<NavConfig> {
    Json(state.nav().as_ref().clone())
}

/// Create the navigation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/navigation", get(navigation))
}
