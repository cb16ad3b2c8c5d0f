use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    auth::AuthClaims,
    errors::{ApiError, rejection_response},
    http::handlers::respond_with,
    league::{
        admission::{admit, cancel_reservation},
        season::active_season,
    },
    models::reservation::{Admission, Reservation, ReservationRequest},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationPayload {
    pub tee_time_id: Uuid,
    pub slots: i32,
    #[serde(default)]
    pub player_names: Vec<String>,
    pub play_for_money: Vec<bool>,
    pub idempotency_key: Option<Uuid>,
}

pub async fn create_reservation_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Json(payload): Json<CreateReservationPayload>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let user_id = claims.user_id().map_err(|e| e.to_response())?;

    let request = ReservationRequest {
        tee_time_id: payload.tee_time_id,
        user_id,
        slots: payload.slots,
        player_names: payload
            .player_names
            .into_iter()
            .map(|name| name.trim().to_string())
            .collect(),
        play_for_money: payload.play_for_money,
        idempotency_key: payload.idempotency_key,
    };

    match admit(state.store.as_ref(), request, Utc::now()).await {
        Ok(Admission::Admitted(reservation)) => Ok((StatusCode::CREATED, Json(reservation))),
        Ok(Admission::Rejected(rejection)) => Err(rejection_response(&rejection)),
        Err(e) => Err(respond_with("Error creating reservation", e)),
    }
}

pub async fn cancel_reservation_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
    Path(reservation_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let requester_id = claims.user_id().map_err(|e| e.to_response())?;

    cancel_reservation(state.store.as_ref(), reservation_id, requester_id)
        .await
        .map_err(|e| respond_with("Error cancelling reservation", e))?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_my_reservations_handler(
    State(state): State<AppState>,
    claims: AuthClaims,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let user_id = claims.user_id().map_err(|e| e.to_response())?;

    let season = active_season(state.store.as_ref())
        .await
        .map_err(|e| respond_with("Error fetching active season", e))?;

    let reservations = state
        .store
        .reservations_for_user(user_id, season.id)
        .await
        .map_err(|e| respond_with("Error listing reservations", e))?;

    Ok(Json(reservations))
}
