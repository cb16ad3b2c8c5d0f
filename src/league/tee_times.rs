use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    db::store::LeagueStore,
    errors::AppError,
    league::{
        availability::summarize,
        template::validate_max_slots,
        window::{WindowRule, parse_wall_clock},
    },
    models::{
        season::Season,
        tee_time::{NewTeeTime, TeeTimeAvailability, TeeTimeDraft, TeeTimeInstance},
    },
};

pub async fn availability_for_date(
    store: &dyn LeagueStore,
    date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Vec<TeeTimeAvailability>, AppError> {
    let entries = store.tee_times_on(date).await?;
    Ok(summarize(&entries, now))
}

/// Adds a single tee time outside the template. It belongs to whichever
/// season covers its date.
pub async fn create_tee_time(
    store: &dyn LeagueStore,
    input: NewTeeTime,
) -> Result<TeeTimeInstance, AppError> {
    let time = parse_wall_clock(&input.time)?;
    validate_max_slots(input.max_slots)?;

    let window = WindowRule::parse(
        input.booking_opens_days_before,
        &input.booking_opens_time,
        input.booking_closes_days_before,
        &input.booking_closes_time,
        &input.timezone,
    )?
    .window_for(input.date)?;

    let season = covering_season(store.list_seasons().await?, input.date)?;

    let tee_time = store
        .insert_tee_time(TeeTimeDraft {
            season_id: season.id,
            date: input.date,
            time,
            max_slots: input.max_slots,
            window,
        })
        .await?;

    tracing::info!(
        "Created tee time {} on {} at {} in season {}",
        tee_time.id,
        tee_time.date,
        tee_time.time,
        season.id
    );

    Ok(tee_time)
}

/// The active season wins when seasons overlap; otherwise exactly one season
/// may cover the date.
fn covering_season(seasons: Vec<Season>, date: NaiveDate) -> Result<Season, AppError> {
    let mut covering: Vec<Season> = seasons.into_iter().filter(|s| s.contains(date)).collect();

    if let Some(index) = covering.iter().position(|s| s.is_active) {
        return Ok(covering.swap_remove(index));
    }

    match covering.len() {
        0 => Err(AppError::Validation(format!("No season covers {date}"))),
        1 => Ok(covering.remove(0)),
        n => Err(AppError::Validation(format!(
            "{n} seasons cover {date}; activate the one this tee time belongs to"
        ))),
    }
}

pub async fn set_availability(
    store: &dyn LeagueStore,
    tee_time_id: Uuid,
    is_available: bool,
) -> Result<TeeTimeInstance, AppError> {
    let tee_time = store
        .set_tee_time_available(tee_time_id, is_available)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tee time {tee_time_id} not found")))?;

    tracing::info!(
        "Tee time {} marked {}",
        tee_time_id,
        if is_available { "available" } else { "unavailable" }
    );

    Ok(tee_time)
}

pub async fn list_for_season(
    store: &dyn LeagueStore,
    season_id: i32,
) -> Result<Vec<TeeTimeInstance>, AppError> {
    store
        .get_season(season_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Season {season_id} not found")))?;

    store.tee_times_for_season(season_id).await
}
