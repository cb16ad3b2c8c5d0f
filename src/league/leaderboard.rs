use chrono::NaiveDate;
use std::{cmp::Ordering, collections::HashMap};
use uuid::Uuid;

use crate::{
    db::store::LeagueStore,
    errors::AppError,
    league::season::active_season,
    models::{
        leaderboard::LeaderBoard,
        round::{NewRound, Round},
    },
};

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 200;

pub fn build_leaderboard(rounds: &[Round]) -> Vec<LeaderBoard> {
    let mut per_user: HashMap<Uuid, Vec<i32>> = HashMap::new();
    for round in rounds {
        per_user.entry(round.user_id).or_default().push(round.score);
    }

    let mut leaderboards: Vec<LeaderBoard> = per_user
        .into_iter()
        .filter_map(|(user_id, scores)| {
            let best_score = *scores.iter().min()?;
            let total: i64 = scores.iter().map(|s| i64::from(*s)).sum();

            Some(LeaderBoard {
                user_id,
                rank: 0, // Will be set after sorting
                rounds_played: scores.len() as u64,
                average_score: total as f64 / scores.len() as f64,
                best_score,
            })
        })
        .collect();

    // Lowest average first, then more rounds, then best single round
    leaderboards.sort_by(|a, b| {
        a.average_score
            .partial_cmp(&b.average_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.rounds_played.cmp(&a.rounds_played))
            .then_with(|| a.best_score.cmp(&b.best_score))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    for (index, leaderboard) in leaderboards.iter_mut().enumerate() {
        leaderboard.rank = (index + 1) as u64;
    }

    leaderboards
}

pub async fn season_leaderboard(store: &dyn LeagueStore) -> Result<Vec<LeaderBoard>, AppError> {
    let season = active_season(store).await?;
    let rounds = store.rounds_for_season(season.id).await?;

    Ok(build_leaderboard(&rounds))
}

pub async fn submit_round(
    store: &dyn LeagueStore,
    user_id: Uuid,
    played_on: NaiveDate,
    score: i32,
) -> Result<Round, AppError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AppError::Validation(format!(
            "Score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        )));
    }

    let season = active_season(store).await?;
    if !season.contains(played_on) {
        return Err(AppError::Validation(format!(
            "{} is outside the {} season ({} to {})",
            played_on, season.name, season.start_date, season.end_date
        )));
    }

    let round = store
        .insert_round(NewRound {
            season_id: season.id,
            user_id,
            played_on,
            score,
        })
        .await?;

    tracing::info!(
        "Recorded round {} for user {}: {} on {}",
        round.id,
        user_id,
        score,
        played_on
    );

    Ok(round)
}
