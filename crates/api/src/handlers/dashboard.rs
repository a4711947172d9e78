use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use campaignhub_core::dashboard::{self, DEFAULT_RECENT_LIMIT};

use crate::error::AppResult;
use crate::query::RecentParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard
///
/// Entity counts across all campaigns plus the first `limit` campaigns
/// (default 3).
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> AppResult<impl IntoResponse> {
    let registry = state.campaigns.read().await;
    let summary = dashboard::summarize(&registry, params.limit.unwrap_or(DEFAULT_RECENT_LIMIT));

    Ok(Json(DataResponse { data: summary }))
}
