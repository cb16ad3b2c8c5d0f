use sqlx::PgPool;

use crate::{db::db_error, errors::AppError, models::season::Season};

use super::SEASON_COLUMNS;

pub async fn get_active_season(postgres: &PgPool) -> Result<Option<Season>, AppError> {
    sqlx::query_as::<_, Season>(&format!(
        "SELECT {SEASON_COLUMNS} FROM seasons WHERE is_active LIMIT 1"
    ))
    .fetch_optional(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch active season", e))
}

pub async fn get_season(season_id: i32, postgres: &PgPool) -> Result<Option<Season>, AppError> {
    sqlx::query_as::<_, Season>(&format!(
        "SELECT {SEASON_COLUMNS} FROM seasons WHERE id = $1"
    ))
    .bind(season_id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch season", e))
}

pub async fn get_all_seasons(postgres: &PgPool) -> Result<Vec<Season>, AppError> {
    sqlx::query_as::<_, Season>(&format!(
        "SELECT {SEASON_COLUMNS} FROM seasons ORDER BY start_date DESC"
    ))
    .fetch_all(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch seasons", e))
}
