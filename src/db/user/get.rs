use sqlx::PgPool;
use uuid::Uuid;

use crate::{db::db_error, errors::AppError, models::User};

pub async fn get_user_by_id(user_id: Uuid, postgres: &PgPool) -> Result<Option<User>, AppError> {
    sqlx::query_as::<_, User>("SELECT id, display_name, is_admin FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(postgres)
        .await
        .map_err(|e| db_error("Failed to fetch user", e))
}
