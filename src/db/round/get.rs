use sqlx::PgPool;

use crate::{db::db_error, errors::AppError, models::round::Round};

pub async fn get_rounds_for_season(season_id: i32, postgres: &PgPool) -> Result<Vec<Round>, AppError> {
    sqlx::query_as::<_, Round>(
        "SELECT id, season_id, user_id, played_on, score, created_at
        FROM rounds
        WHERE season_id = $1
        ORDER BY played_on, created_at",
    )
    .bind(season_id)
    .fetch_all(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch rounds", e))
}
