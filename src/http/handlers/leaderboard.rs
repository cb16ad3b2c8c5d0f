use axum::{extract::State, response::Json};

use crate::{
    errors::ApiError, http::handlers::respond_with, league::leaderboard::season_leaderboard,
    models::leaderboard::LeaderBoard, state::AppState,
};

pub async fn get_leaderboard_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderBoard>>, ApiError> {
    let leaderboard = season_leaderboard(state.store.as_ref())
        .await
        .map_err(|e| respond_with("Failed to get leaderboard", e))?;

    Ok(Json(leaderboard))
}
