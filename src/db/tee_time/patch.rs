use sqlx::PgPool;
use uuid::Uuid;

use crate::{db::db_error, errors::AppError, models::tee_time::TeeTimeInstance};

use super::TEE_TIME_COLUMNS;

pub async fn update_tee_time_availability(
    tee_time_id: Uuid,
    is_available: bool,
    postgres: &PgPool,
) -> Result<Option<TeeTimeInstance>, AppError> {
    sqlx::query_as::<_, TeeTimeInstance>(&format!(
        "UPDATE tee_times SET is_available = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING {TEE_TIME_COLUMNS}"
    ))
    .bind(tee_time_id)
    .bind(is_available)
    .fetch_optional(postgres)
    .await
    .map_err(|e| db_error("Failed to update tee time availability", e))
}
