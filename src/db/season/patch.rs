use sqlx::PgPool;

use crate::{
    db::{SEASON_SWAP_LOCK, db_error},
    errors::AppError,
    models::season::Season,
};

use super::SEASON_COLUMNS;

/// Deactivate-all plus activate-one in a single transaction.
pub async fn activate_season(season_id: i32, postgres: &PgPool) -> Result<Option<Season>, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| db_error("Failed to start transaction", e))?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SEASON_SWAP_LOCK)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to lock season activation", e))?;

    let exists = sqlx::query_scalar::<_, i32>("SELECT id FROM seasons WHERE id = $1")
        .bind(season_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to fetch season", e))?;

    if exists.is_none() {
        let _ = tx.rollback().await;
        return Ok(None);
    }

    sqlx::query("UPDATE seasons SET is_active = FALSE WHERE is_active AND id <> $1")
        .bind(season_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to deactivate seasons", e))?;

    let season = sqlx::query_as::<_, Season>(&format!(
        "UPDATE seasons SET is_active = TRUE WHERE id = $1 RETURNING {SEASON_COLUMNS}"
    ))
    .bind(season_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| db_error("Failed to activate season", e))?;

    tx.commit()
        .await
        .map_err(|e| db_error("Failed to commit season activation", e))?;

    Ok(Some(season))
}
