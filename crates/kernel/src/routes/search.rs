//! Registry search proxy.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::registry::PluginSummary;
use crate::state::AppState;

/// Search query parameters.
#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Proxy a search to the plugin registry.
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<PluginSummary>>> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest("missing query parameter: q".to_string()))?;

    let results = state.registry().search(query).await?;
    Ok(Json(results))
}

/// Create the search router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/search", get(search))
}
