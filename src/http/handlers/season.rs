use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    auth::AdminClaims,
    errors::ApiError,
    http::handlers::respond_with,
    league::season::{active_season, create_season, delete_season, set_active},
    models::season::{NewSeason, Season},
    state::AppState,
};

pub async fn get_active_season_handler(
    State(state): State<AppState>,
) -> Result<Json<Season>, ApiError> {
    let season = active_season(state.store.as_ref())
        .await
        .map_err(|e| respond_with("Error fetching active season", e))?;

    Ok(Json(season))
}

pub async fn get_seasons_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Season>>, ApiError> {
    let seasons = state
        .store
        .list_seasons()
        .await
        .map_err(|e| respond_with("Error listing seasons", e))?;

    Ok(Json(seasons))
}

pub async fn add_season_handler(
    State(state): State<AppState>,
    AdminClaims(admin_id): AdminClaims,
    Json(payload): Json<NewSeason>,
) -> Result<(StatusCode, Json<Season>), ApiError> {
    let season = create_season(state.store.as_ref(), payload)
        .await
        .map_err(|e| respond_with("Error creating season", e))?;

    tracing::info!(
        "Season created by {}: {} (ID: {})",
        admin_id,
        season.name,
        season.id
    );
    Ok((StatusCode::CREATED, Json(season)))
}

pub async fn activate_season_handler(
    State(state): State<AppState>,
    AdminClaims(admin_id): AdminClaims,
    Path(season_id): Path<i32>,
) -> Result<Json<Season>, ApiError> {
    let season = set_active(state.store.as_ref(), season_id)
        .await
        .map_err(|e| respond_with("Error activating season", e))?;

    tracing::info!("Season {} activated by {}", season.id, admin_id);
    Ok(Json(season))
}

pub async fn delete_season_handler(
    State(state): State<AppState>,
    AdminClaims(admin_id): AdminClaims,
    Path(season_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    delete_season(state.store.as_ref(), season_id)
        .await
        .map_err(|e| respond_with("Error deleting season", e))?;

    tracing::info!("Season {} deleted by {}", season_id, admin_id);
    Ok(StatusCode::NO_CONTENT)
}
