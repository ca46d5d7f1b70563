//! Registry plugin lookup.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::{AppError, AppResult};
use crate::registry::PluginDetail;
use crate::state::AppState;

/// Fetch one plugin record from the registry.
async fn plugin_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<PluginDetail>> {
    let detail = state
        .registry()
        .plugin(&name)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(detail))
}

/// Create the plugin lookup router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/plugins/{name}", get(plugin_detail))
}
