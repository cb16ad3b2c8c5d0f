use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderBoard {
    pub user_id: Uuid,
    pub rank: u64,
    pub rounds_played: u64,
    pub average_score: f64,
    pub best_score: i32,
}
