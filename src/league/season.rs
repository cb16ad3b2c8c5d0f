use crate::{
    db::store::LeagueStore,
    errors::AppError,
    models::season::{NewSeason, Season, SeasonDeletion},
};

pub async fn active_season(store: &dyn LeagueStore) -> Result<Season, AppError> {
    store.active_season().await?.ok_or(AppError::NoActiveSeason)
}

/// Makes `season_id` the only active season.
pub async fn set_active(store: &dyn LeagueStore, season_id: i32) -> Result<Season, AppError> {
    let season = store
        .activate_season(season_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Season {season_id} not found")))?;

    tracing::info!("Season {} ({}) is now active", season.name, season.id);
    Ok(season)
}

pub fn validate_season(input: &NewSeason) -> Result<(), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Season name cannot be blank".into()));
    }

    if !(1900..=9999).contains(&input.year) {
        return Err(AppError::Validation(format!(
            "Season year {} is out of range",
            input.year
        )));
    }

    if input.end_date < input.start_date {
        return Err(AppError::Validation(
            "End date must not be before start date".into(),
        ));
    }

    Ok(())
}

pub async fn create_season(store: &dyn LeagueStore, input: NewSeason) -> Result<Season, AppError> {
    validate_season(&input)?;

    let name = input.name.trim().to_string();
    if store
        .list_seasons()
        .await?
        .iter()
        .any(|season| season.name.eq_ignore_ascii_case(&name))
    {
        return Err(AppError::Conflict(format!(
            "Season with name '{name}' already exists"
        )));
    }

    let season = store.create_season(NewSeason { name, ..input }).await?;
    tracing::info!("Created new season: {} (ID: {})", season.name, season.id);

    Ok(season)
}

pub async fn delete_season(store: &dyn LeagueStore, season_id: i32) -> Result<(), AppError> {
    match store.delete_season(season_id).await? {
        SeasonDeletion::Deleted => {
            tracing::info!("Deleted season {}", season_id);
            Ok(())
        }
        SeasonDeletion::NotFound => Err(AppError::NotFound(format!(
            "Season {season_id} not found"
        ))),
        SeasonDeletion::InUse => Err(AppError::Conflict(format!(
            "Season {season_id} still has tee times, reservations or rounds"
        ))),
    }
}
