use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, postgres::PgPoolOptions};
use uuid::Uuid;

use crate::{
    db::{reservation, round, schedule, season, store::LeagueStore, tee_time, user},
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

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect to Postgres: {e}")))?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {e}")))
    }
}

#[async_trait]
impl LeagueStore for PgStore {
    async fn create_season(&self, new_season: NewSeason) -> Result<Season, AppError> {
        season::post::add_season(new_season, &self.pool).await
    }

    async fn list_seasons(&self) -> Result<Vec<Season>, AppError> {
        season::get::get_all_seasons(&self.pool).await
    }

    async fn get_season(&self, season_id: i32) -> Result<Option<Season>, AppError> {
        season::get::get_season(season_id, &self.pool).await
    }

    async fn active_season(&self) -> Result<Option<Season>, AppError> {
        season::get::get_active_season(&self.pool).await
    }

    async fn activate_season(&self, season_id: i32) -> Result<Option<Season>, AppError> {
        season::patch::activate_season(season_id, &self.pool).await
    }

    async fn delete_season(&self, season_id: i32) -> Result<SeasonDeletion, AppError> {
        season::delete::delete_season(season_id, &self.pool).await
    }

    async fn get_template(&self, season_id: i32) -> Result<Option<ScheduleTemplate>, AppError> {
        schedule::get::get_template(season_id, &self.pool).await
    }

    async fn put_template(
        &self,
        season_id: i32,
        rule: TemplateRule,
    ) -> Result<ScheduleTemplate, AppError> {
        schedule::put::put_template(season_id, rule, &self.pool).await
    }

    async fn upsert_tee_times(
        &self,
        drafts: Vec<TeeTimeDraft>,
    ) -> Result<GenerateSummary, AppError> {
        tee_time::put::upsert_tee_times(drafts, &self.pool).await
    }

    async fn insert_tee_time(&self, draft: TeeTimeDraft) -> Result<TeeTimeInstance, AppError> {
        tee_time::post::create_tee_time(draft, &self.pool).await
    }

    async fn get_tee_time(&self, tee_time_id: Uuid) -> Result<Option<TeeTimeInstance>, AppError> {
        tee_time::get::get_tee_time(tee_time_id, &self.pool).await
    }

    async fn tee_times_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<TeeTimeWithReservations>, AppError> {
        tee_time::get::get_tee_times_on(date, &self.pool).await
    }

    async fn tee_times_for_season(
        &self,
        season_id: i32,
    ) -> Result<Vec<TeeTimeInstance>, AppError> {
        tee_time::get::get_tee_times_for_season(season_id, &self.pool).await
    }

    async fn set_tee_time_available(
        &self,
        tee_time_id: Uuid,
        is_available: bool,
    ) -> Result<Option<TeeTimeInstance>, AppError> {
        tee_time::patch::update_tee_time_availability(tee_time_id, is_available, &self.pool).await
    }

    async fn admit_reservation(
        &self,
        request: &ReservationRequest,
        now: DateTime<Utc>,
    ) -> Result<Admission, AppError> {
        reservation::post::create_reservation_with_check(request, now, &self.pool).await
    }

    async fn get_reservation(
        &self,
        reservation_id: Uuid,
    ) -> Result<Option<Reservation>, AppError> {
        reservation::get::get_reservation(reservation_id, &self.pool).await
    }

    async fn delete_reservation(&self, reservation_id: Uuid) -> Result<bool, AppError> {
        reservation::delete::delete_reservation(reservation_id, &self.pool).await
    }

    async fn reservations_for_user(
        &self,
        user_id: Uuid,
        season_id: i32,
    ) -> Result<Vec<Reservation>, AppError> {
        reservation::get::get_user_reservations(user_id, season_id, &self.pool).await
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        user::get_user_by_id(user_id, &self.pool).await
    }

    async fn insert_round(&self, new_round: NewRound) -> Result<Round, AppError> {
        round::post::add_round(new_round, &self.pool).await
    }

    async fn rounds_for_season(&self, season_id: i32) -> Result<Vec<Round>, AppError> {
        round::get::get_rounds_for_season(season_id, &self.pool).await
    }
}
