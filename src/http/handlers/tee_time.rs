use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AdminClaims,
    errors::ApiError,
    http::handlers::respond_with,
    league::tee_times::{availability_for_date, create_tee_time, list_for_season, set_availability},
    models::tee_time::{NewTeeTime, TeeTimeAvailability, TeeTimeInstance},
    state::AppState,
};

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityTogglePayload {
    pub is_available: bool,
}

pub async fn get_availability_handler(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<TeeTimeAvailability>>, ApiError> {
    let availability = availability_for_date(state.store.as_ref(), query.date, Utc::now())
        .await
        .map_err(|e| respond_with("Error computing availability", e))?;

    Ok(Json(availability))
}

pub async fn get_season_tee_times_handler(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<Json<Vec<TeeTimeInstance>>, ApiError> {
    let tee_times = list_for_season(state.store.as_ref(), season_id)
        .await
        .map_err(|e| respond_with("Error listing season tee times", e))?;

    Ok(Json(tee_times))
}

pub async fn create_tee_time_handler(
    State(state): State<AppState>,
    AdminClaims(_): AdminClaims,
    Json(payload): Json<NewTeeTime>,
) -> Result<(StatusCode, Json<TeeTimeInstance>), ApiError> {
    let tee_time = create_tee_time(state.store.as_ref(), payload)
        .await
        .map_err(|e| respond_with("Error creating tee time", e))?;

    Ok((StatusCode::CREATED, Json(tee_time)))
}

pub async fn set_tee_time_availability_handler(
    State(state): State<AppState>,
    AdminClaims(_): AdminClaims,
    Path(tee_time_id): Path<Uuid>,
    Json(payload): Json<AvailabilityTogglePayload>,
) -> Result<Json<TeeTimeInstance>, ApiError> {
    let tee_time = set_availability(state.store.as_ref(), tee_time_id, payload.is_available)
        .await
        .map_err(|e| respond_with("Error updating tee time availability", e))?;

    Ok(Json(tee_time))
}
