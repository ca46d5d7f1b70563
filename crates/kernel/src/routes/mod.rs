//! HTTP route handlers.

pub mod health;
pub mod navigation;
pub mod plugins;
pub mod robots;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Assemble the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(robots::router())
        .merge(navigation::router())
        .merge(search::router())
        .merge(plugins::router())
        .with_state(state)
}
