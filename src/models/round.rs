use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: Uuid,
    pub season_id: i32,
    pub user_id: Uuid,
    pub played_on: NaiveDate,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRound {
    pub season_id: i32,
    pub user_id: Uuid,
    pub played_on: NaiveDate,
    pub score: i32,
}
