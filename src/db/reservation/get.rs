use sqlx::PgPool;
use uuid::Uuid;

use crate::{db::db_error, errors::AppError, models::reservation::Reservation};

use super::RESERVATION_COLUMNS;

pub async fn get_reservation(
    reservation_id: Uuid,
    postgres: &PgPool,
) -> Result<Option<Reservation>, AppError> {
    sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1"
    ))
    .bind(reservation_id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch reservation", e))
}

pub async fn get_reservations_for_tee_times(
    tee_time_ids: &[Uuid],
    postgres: &PgPool,
) -> Result<Vec<Reservation>, AppError> {
    if tee_time_ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, Reservation>(&format!(
        "SELECT {RESERVATION_COLUMNS} FROM reservations
        WHERE tee_time_id = ANY($1)
        ORDER BY created_at"
    ))
    .bind(tee_time_ids)
    .fetch_all(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch reservations", e))
}

pub async fn get_user_reservations(
    user_id: Uuid,
    season_id: i32,
    postgres: &PgPool,
) -> Result<Vec<Reservation>, AppError> {
    sqlx::query_as::<_, Reservation>(
        "SELECT r.id, r.tee_time_id, r.user_id, r.slots, r.player_names,
            r.play_for_money, r.idempotency_key, r.created_at
        FROM reservations r
        JOIN tee_times t ON t.id = r.tee_time_id
        WHERE r.user_id = $1 AND t.season_id = $2
        ORDER BY t.play_date, t.start_time",
    )
    .bind(user_id)
    .bind(season_id)
    .fetch_all(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch user reservations", e))
}
