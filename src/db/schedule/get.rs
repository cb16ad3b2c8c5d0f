use sqlx::PgPool;

use crate::{db::db_error, errors::AppError, models::schedule::ScheduleTemplate};

use super::TEMPLATE_COLUMNS;

pub async fn get_template(
    season_id: i32,
    postgres: &PgPool,
) -> Result<Option<ScheduleTemplate>, AppError> {
    sqlx::query_as::<_, ScheduleTemplate>(&format!(
        "SELECT {TEMPLATE_COLUMNS} FROM schedule_templates WHERE season_id = $1"
    ))
    .bind(season_id)
    .fetch_optional(postgres)
    .await
    .map_err(|e| db_error("Failed to fetch schedule template", e))
}
