use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::db_error,
    errors::AppError,
    models::tee_time::{TeeTimeDraft, TeeTimeInstance},
};

use super::TEE_TIME_COLUMNS;

pub async fn create_tee_time(
    draft: TeeTimeDraft,
    postgres: &PgPool,
) -> Result<TeeTimeInstance, AppError> {
    sqlx::query_as::<_, TeeTimeInstance>(&format!(
        "INSERT INTO tee_times (
            id, season_id, play_date, start_time, max_slots,
            booking_opens_at, booking_closes_at, is_available
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
        RETURNING {TEE_TIME_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(draft.season_id)
    .bind(draft.date)
    .bind(draft.time)
    .bind(draft.max_slots)
    .bind(draft.window.opens_at)
    .bind(draft.window.closes_at)
    .fetch_one(postgres)
    .await
    .map_err(|e| db_error("Failed to create tee time", e))
}
