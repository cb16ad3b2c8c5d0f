use sqlx::PgPool;
use uuid::Uuid;

use crate::{db::db_error, errors::AppError};

pub async fn delete_reservation(reservation_id: Uuid, postgres: &PgPool) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
        .bind(reservation_id)
        .execute(postgres)
        .await
        .map_err(|e| db_error("Failed to delete reservation", e))?;

    Ok(result.rows_affected() == 1)
}
