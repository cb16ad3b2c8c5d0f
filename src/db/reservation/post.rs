use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::{db_error, tee_time::TEE_TIME_COLUMNS},
    errors::AppError,
    league::admission::{decide, replay_existing},
    models::{
        reservation::{Admission, Reservation, ReservationRequest},
        tee_time::TeeTimeInstance,
    },
};

use super::RESERVATION_COLUMNS;

/// Admission transaction. `FOR UPDATE` on the tee-time row serializes every
/// admission against the same tee time, so the reserved count read here is
/// the one the insert commits against.
pub async fn create_reservation_with_check(
    request: &ReservationRequest,
    now: DateTime<Utc>,
    postgres: &PgPool,
) -> Result<Admission, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| db_error("Failed to start transaction", e))?;

    let tee_time = sqlx::query_as::<_, TeeTimeInstance>(&format!(
        "SELECT {TEE_TIME_COLUMNS} FROM tee_times WHERE id = $1 FOR UPDATE"
    ))
    .bind(request.tee_time_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| db_error("Failed to lock tee time", e))?;

    let Some(tee_time) = tee_time else {
        let _ = tx.rollback().await;
        return Err(AppError::NotFound(format!(
            "Tee time {} not found",
            request.tee_time_id
        )));
    };

    if let Some(key) = request.idempotency_key {
        let existing = sqlx::query_as::<_, Reservation>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations
            WHERE user_id = $1 AND idempotency_key = $2"
        ))
        .bind(request.user_id)
        .bind(key)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to check idempotency key", e))?;

        if let Some(existing) = existing {
            let _ = tx.rollback().await;
            let existing = replay_existing(existing, request)?;
            tracing::info!(
                "Replayed reservation {} for idempotency key {}",
                existing.id,
                key
            );
            return Ok(Admission::Admitted(existing));
        }
    }

    let reserved = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(slots), 0) FROM reservations WHERE tee_time_id = $1",
    )
    .bind(tee_time.id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| db_error("Failed to count reserved slots", e))?;

    let reserved = i32::try_from(reserved).map_err(|_| {
        AppError::DatabaseError(format!("Reserved slot count {reserved} out of range"))
    })?;

    if let Err(rejection) = decide(&tee_time, reserved, request.slots, now) {
        let _ = tx.rollback().await;
        return Ok(Admission::Rejected(rejection));
    }

    let reservation = sqlx::query_as::<_, Reservation>(&format!(
        "INSERT INTO reservations (
            id, tee_time_id, user_id, slots, player_names, play_for_money, idempotency_key
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {RESERVATION_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(tee_time.id)
    .bind(request.user_id)
    .bind(request.slots)
    .bind(&request.player_names)
    .bind(&request.play_for_money)
    .bind(request.idempotency_key)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| db_error("Failed to insert reservation", e))?;

    tx.commit()
        .await
        .map_err(|e| db_error("Failed to commit reservation", e))?;

    Ok(Admission::Admitted(reservation))
}
