use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::db_error,
    errors::AppError,
    models::schedule::{ScheduleTemplate, TemplateRule},
};

use super::TEMPLATE_COLUMNS;

pub async fn put_template(
    season_id: i32,
    rule: TemplateRule,
    postgres: &PgPool,
) -> Result<ScheduleTemplate, AppError> {
    sqlx::query_as::<_, ScheduleTemplate>(&format!(
        "INSERT INTO schedule_templates (
            id, season_id, day_of_week, time_slots, max_slots,
            booking_opens_days_before, booking_opens_time,
            booking_closes_days_before, booking_closes_time, timezone
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (season_id) DO UPDATE SET
            day_of_week = EXCLUDED.day_of_week,
            time_slots = EXCLUDED.time_slots,
            max_slots = EXCLUDED.max_slots,
            booking_opens_days_before = EXCLUDED.booking_opens_days_before,
            booking_opens_time = EXCLUDED.booking_opens_time,
            booking_closes_days_before = EXCLUDED.booking_closes_days_before,
            booking_closes_time = EXCLUDED.booking_closes_time,
            timezone = EXCLUDED.timezone,
            updated_at = NOW()
        RETURNING {TEMPLATE_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(season_id)
    .bind(rule.day_of_week)
    .bind(&rule.time_slots)
    .bind(rule.max_slots)
    .bind(rule.booking_opens_days_before)
    .bind(rule.booking_opens_time)
    .bind(rule.booking_closes_days_before)
    .bind(rule.booking_closes_time)
    .bind(&rule.timezone)
    .fetch_one(postgres)
    .await
    .map_err(|e| db_error("Failed to save schedule template", e))
}
