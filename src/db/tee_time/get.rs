use chrono::NaiveDate;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    db::{db_error, reservation::get::get_reservations_for_tee_times},
    errors::AppError,
    models::tee_time::{TeeTimeInstance, TeeTimeWithReservations},
};

use super::TEE_TIME_COLUMNS;

pub async fn get_tee_time(
    tee_time_id: Uuid,
    postgres: &PgPool,
) -> Result<Option<TeeTimeInstance>, AppError> {
    sqlx::query_as::<_, TeeTimeInstance>(&format!(
        "SELECT {TEE_TIME_COLUMNS} FROM tee_times WHERE id = $1"
    ))
    .bind(tee_time_id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch tee time", e))
}

pub async fn get_tee_times_for_season(
    season_id: i32,
    postgres: &PgPool,
) -> Result<Vec<TeeTimeInstance>, AppError> {
    sqlx::query_as::<_, TeeTimeInstance>(&format!(
        "SELECT {TEE_TIME_COLUMNS} FROM tee_times
        WHERE season_id = $1
        ORDER BY play_date, start_time"
    ))
    .bind(season_id)
    .fetch_all(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch season tee times", e))
}

pub async fn get_tee_times_on(
    date: NaiveDate,
    postgres: &PgPool,
) -> Result<Vec<TeeTimeWithReservations>, AppError> {
    let tee_times = sqlx::query_as::<_, TeeTimeInstance>(&format!(
        "SELECT {TEE_TIME_COLUMNS} FROM tee_times
        WHERE play_date = $1
        ORDER BY start_time"
    ))
    .bind(date)
    .fetch_all(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch tee times", e))?;

    let ids: Vec<Uuid> = tee_times.iter().map(|t| t.id).collect();
    let mut by_tee_time = HashMap::<Uuid, Vec<_>>::new();
    for reservation in get_reservations_for_tee_times(&ids, postgres).await? {
        by_tee_time
            .entry(reservation.tee_time_id)
            .or_default()
            .push(reservation);
    }

    Ok(tee_times
        .into_iter()
        .map(|tee_time| TeeTimeWithReservations {
            reservations: by_tee_time.remove(&tee_time.id).unwrap_or_default(),
            tee_time,
        })
        .collect())
}
