use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    errors::ApiError,
    http::handlers::respond_with,
    league::leaderboard::submit_round,
    models::round::Round,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRoundPayload {
    pub played_on: NaiveDate,
    pub score: i32,
}

pub async fn submit_round_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<SubmitRoundPayload>,
) -> Result<(StatusCode, Json<Round>), ApiError> {
    let user_id = claims.user_id().map_err(|e| e.to_response())?;

    let round = submit_round(state.store.as_ref(), user_id, payload.played_on, payload.score)
        .await
        .map_err(|e| respond_with("Error submitting round", e))?;

    Ok((StatusCode::CREATED, Json(round)))
}
