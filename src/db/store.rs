use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{
        User,
        reservation::{Admission, Reservation, ReservationRequest},
        round::{NewRound, Round},
        schedule::{GenerateSummary, ScheduleTemplate, TemplateRule},
        season::{NewSeason, Season, SeasonDeletion},
        tee_time::{TeeTimeDraft, TeeTimeInstance, TeeTimeWithReservations},
    },
};

pub type SharedStore = Arc<dyn LeagueStore>;

/// Persistence for the league. Every method is one atomic unit: multi-step
/// writes commit together or not at all.
#[async_trait]
pub trait LeagueStore: Send + Sync {
    async fn create_season(&self, season: NewSeason) -> Result<Season, AppError>;

    async fn list_seasons(&self) -> Result<Vec<Season>, AppError>;

    async fn get_season(&self, season_id: i32) -> Result<Option<Season>, AppError>;

    async fn active_season(&self) -> Result<Option<Season>, AppError>;

    /// Deactivates every other season and activates `season_id` in one commit.
    /// Returns `None` when the season does not exist.
    async fn activate_season(&self, season_id: i32) -> Result<Option<Season>, AppError>;

    /// Deletes the season only when no tee times, reservations or rounds reference it.
    async fn delete_season(&self, season_id: i32) -> Result<SeasonDeletion, AppError>;

    async fn get_template(&self, season_id: i32) -> Result<Option<ScheduleTemplate>, AppError>;

    /// Creates or replaces the season's template.
    async fn put_template(
        &self,
        season_id: i32,
        rule: TemplateRule,
    ) -> Result<ScheduleTemplate, AppError>;

    /// Upserts tee times by `(date, time)`. Existing rows take the draft's
    /// capacity, season and window and are re-enabled; capacity never drops
    /// below the slots already reserved. Not run concurrently with itself.
    async fn upsert_tee_times(&self, drafts: Vec<TeeTimeDraft>)
    -> Result<GenerateSummary, AppError>;

    /// Inserts one tee time. A tee time already at `(date, time)` is a `Conflict`.
    async fn insert_tee_time(&self, draft: TeeTimeDraft) -> Result<TeeTimeInstance, AppError>;

    async fn get_tee_time(&self, tee_time_id: Uuid) -> Result<Option<TeeTimeInstance>, AppError>;

    async fn tee_times_on(&self, date: NaiveDate)
    -> Result<Vec<TeeTimeWithReservations>, AppError>;

    async fn tee_times_for_season(&self, season_id: i32)
    -> Result<Vec<TeeTimeInstance>, AppError>;

    async fn set_tee_time_available(
        &self,
        tee_time_id: Uuid,
        is_available: bool,
    ) -> Result<Option<TeeTimeInstance>, AppError>;

    /// Runs the admission decision against a fresh reserved count while holding
    /// the tee time exclusively, and inserts the reservation when admitted.
    async fn admit_reservation(
        &self,
        request: &ReservationRequest,
        now: DateTime<Utc>,
    ) -> Result<Admission, AppError>;

    async fn get_reservation(&self, reservation_id: Uuid)
    -> Result<Option<Reservation>, AppError>;

    async fn delete_reservation(&self, reservation_id: Uuid) -> Result<bool, AppError>;

    async fn reservations_for_user(
        &self,
        user_id: Uuid,
        season_id: i32,
    ) -> Result<Vec<Reservation>, AppError>;

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, AppError>;

    async fn insert_round(&self, round: NewRound) -> Result<Round, AppError>;

    async fn rounds_for_season(&self, season_id: i32) -> Result<Vec<Round>, AppError>;
}
