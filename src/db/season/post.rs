use sqlx::PgPool;

use crate::{
    db::db_error,
    errors::AppError,
    models::season::{NewSeason, Season},
};

use super::SEASON_COLUMNS;

pub async fn add_season(season: NewSeason, postgres: &PgPool) -> Result<Season, AppError> {
    sqlx::query_as::<_, Season>(&format!(
        "INSERT INTO seasons (name, year, start_date, end_date)
        VALUES ($1, $2, $3, $4)
        RETURNING {SEASON_COLUMNS}"
    ))
    .bind(&season.name)
    .bind(season.year)
    .bind(season.start_date)
    .bind(season.end_date)
    .fetch_one(postgres)
    .await
    .map_err(|e| db_error("Failed to create season", e))
}
