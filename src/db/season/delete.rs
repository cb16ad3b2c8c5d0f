use sqlx::PgPool;

use crate::{db::db_error, errors::AppError, models::season::SeasonDeletion};

pub async fn delete_season(season_id: i32, postgres: &PgPool) -> Result<SeasonDeletion, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| db_error("Failed to start transaction", e))?;

    let exists = sqlx::query_scalar::<_, i32>("SELECT id FROM seasons WHERE id = $1 FOR UPDATE")
        .bind(season_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to lock season", e))?;

    if exists.is_none() {
        let _ = tx.rollback().await;
        return Ok(SeasonDeletion::NotFound);
    }

    // Reservations hang off tee times, so checking tee times covers them.
    let in_use = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM tee_times WHERE season_id = $1)
            OR EXISTS (SELECT 1 FROM rounds WHERE season_id = $1)",
    )
    .bind(season_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| db_error("Failed to check season usage", e))?;

    if in_use {
        let _ = tx.rollback().await;
        return Ok(SeasonDeletion::InUse);
    }

    sqlx::query("DELETE FROM seasons WHERE id = $1")
        .bind(season_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to delete season", e))?;

    tx.commit()
        .await
        .map_err(|e| db_error("Failed to commit season deletion", e))?;

    Ok(SeasonDeletion::Deleted)
}
