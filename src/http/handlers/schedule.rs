use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    auth::AdminClaims,
    errors::{ApiError, AppError},
    http::handlers::respond_with,
    league::template::{generate_schedule, save_template},
    models::schedule::{GenerateSummary, ScheduleTemplate, TemplateInput},
    state::AppState,
};

pub async fn get_template_handler(
    State(state): State<AppState>,
    Path(season_id): Path<i32>,
) -> Result<Json<ScheduleTemplate>, ApiError> {
    let template = state
        .store
        .get_template(season_id)
        .await
        .and_then(|template| {
            template.ok_or_else(|| {
                AppError::NotFound(format!("Season {season_id} has no schedule template"))
            })
        })
        .map_err(|e| respond_with("Error fetching schedule template", e))?;

    Ok(Json(template))
}

pub async fn put_template_handler(
    State(state): State<AppState>,
    AdminClaims(_): AdminClaims,
    Path(season_id): Path<i32>,
    Json(payload): Json<TemplateInput>,
) -> Result<Json<ScheduleTemplate>, ApiError> {
    let template = save_template(state.store.as_ref(), season_id, payload)
        .await
        .map_err(|e| respond_with("Error saving schedule template", e))?;

    Ok(Json(template))
}

pub async fn generate_schedule_handler(
    State(state): State<AppState>,
    AdminClaims(admin_id): AdminClaims,
    Path(season_id): Path<i32>,
) -> Result<Json<GenerateSummary>, ApiError> {
    match generate_schedule(state.store.as_ref(), season_id).await {
        Ok(summary) => {
            tracing::info!(
                "Schedule for season {} generated by {}: {} tee time(s)",
                season_id,
                admin_id,
                summary.total()
            );
            Ok(Json(summary))
        }
        Err(AppError::EmptySchedule(msg)) => {
            tracing::warn!("Nothing to generate for season {}: {}", season_id, msg);
            Ok(Json(GenerateSummary::default()))
        }
        Err(e) => Err(respond_with("Error generating schedule", e)),
    }
}
