use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::db::models::LeaderboardEntry;
use crate::repositories;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(ranked))
}

async fn ranked(State(state): State<AppState>) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let entries = repositories::leaderboard::list_ranked(state.db())
        .await
        .map_err(|e| ApiError::store(e, "Failed to load leaderboard"))?;
    Ok(Json(entries))
}
