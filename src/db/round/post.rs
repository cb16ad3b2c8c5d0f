use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::db_error,
    errors::AppError,
    models::round::{NewRound, Round},
};

pub async fn add_round(round: NewRound, postgres: &PgPool) -> Result<Round, AppError> {
    sqlx::query_as::<_, Round>(
        "INSERT INTO rounds (id, season_id, user_id, played_on, score)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, season_id, user_id, played_on, score, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(round.season_id)
    .bind(round.user_id)
    .bind(round.played_on)
    .bind(round.score)
    .fetch_one(postgres)
    .await
    .map_err(|e| db_error("Failed to record round", e))
}
