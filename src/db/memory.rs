use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    db::store::LeagueStore,
    errors::AppError,
    league::admission::{decide, replay_existing},
    models::{
        User,
        reservation::{Admission, Reservation, ReservationRequest},
        round::{NewRound, Round},
        schedule::{GenerateSummary, ScheduleTemplate, TemplateRule},
        season::{NewSeason, Season, SeasonDeletion},
        tee_time::{TeeTimeDraft, TeeTimeInstance, TeeTimeWithReservations},
    },
};

#[derive(Debug, Default)]
struct MemoryState {
    next_season_id: i32,
    seasons: BTreeMap<i32, Season>,
    templates: HashMap<i32, ScheduleTemplate>,
    tee_times: HashMap<Uuid, TeeTimeInstance>,
    tee_time_keys: HashMap<(NaiveDate, NaiveTime), Uuid>,
    reservations: Vec<Reservation>,
    users: HashMap<Uuid, User>,
    rounds: Vec<Round>,
}

impl MemoryState {
    fn reserved_on(&self, tee_time_id: Uuid) -> i32 {
        self.reservations
            .iter()
            .filter(|r| r.tee_time_id == tee_time_id)
            .map(|r| r.slots)
            .sum()
    }

    fn reservations_on(&self, tee_time_id: Uuid) -> Vec<Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.tee_time_id == tee_time_id)
            .cloned()
            .collect()
    }
}

/// In-process store. One mutex guards all state, so every method is atomic
/// with respect to every other.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user: User) {
        self.state.lock().await.users.insert(user.id, user);
    }
}

#[async_trait]
impl LeagueStore for MemoryStore {
    async fn create_season(&self, season: NewSeason) -> Result<Season, AppError> {
        let mut state = self.state.lock().await;
        state.next_season_id += 1;

        let created = Season {
            id: state.next_season_id,
            name: season.name,
            year: season.year,
            start_date: season.start_date,
            end_date: season.end_date,
            is_active: false,
            created_at: Utc::now(),
        };
        state.seasons.insert(created.id, created.clone());

        Ok(created)
    }

    async fn list_seasons(&self) -> Result<Vec<Season>, AppError> {
        let state = self.state.lock().await;
        let mut seasons: Vec<Season> = state.seasons.values().cloned().collect();
        seasons.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(seasons)
    }

    async fn get_season(&self, season_id: i32) -> Result<Option<Season>, AppError> {
        Ok(self.state.lock().await.seasons.get(&season_id).cloned())
    }

    async fn active_season(&self) -> Result<Option<Season>, AppError> {
        let state = self.state.lock().await;
        Ok(state.seasons.values().find(|s| s.is_active).cloned())
    }

    async fn activate_season(&self, season_id: i32) -> Result<Option<Season>, AppError> {
        let mut state = self.state.lock().await;
        if !state.seasons.contains_key(&season_id) {
            return Ok(None);
        }

        for season in state.seasons.values_mut() {
            season.is_active = season.id == season_id;
        }

        Ok(state.seasons.get(&season_id).cloned())
    }

    async fn delete_season(&self, season_id: i32) -> Result<SeasonDeletion, AppError> {
        let mut state = self.state.lock().await;
        if !state.seasons.contains_key(&season_id) {
            return Ok(SeasonDeletion::NotFound);
        }

        let has_tee_times = state.tee_times.values().any(|t| t.season_id == season_id);
        let has_rounds = state.rounds.iter().any(|r| r.season_id == season_id);
        if has_tee_times || has_rounds {
            return Ok(SeasonDeletion::InUse);
        }

        state.templates.remove(&season_id);
        state.seasons.remove(&season_id);
        Ok(SeasonDeletion::Deleted)
    }

    async fn get_template(&self, season_id: i32) -> Result<Option<ScheduleTemplate>, AppError> {
        Ok(self.state.lock().await.templates.get(&season_id).cloned())
    }

    async fn put_template(
        &self,
        season_id: i32,
        rule: TemplateRule,
    ) -> Result<ScheduleTemplate, AppError> {
        let mut state = self.state.lock().await;
        if !state.seasons.contains_key(&season_id) {
            return Err(AppError::NotFound(format!("Season {season_id} not found")));
        }

        let id = state
            .templates
            .get(&season_id)
            .map(|t| t.id)
            .unwrap_or_else(Uuid::new_v4);

        let template = ScheduleTemplate {
            id,
            season_id,
            day_of_week: rule.day_of_week,
            time_slots: rule.time_slots,
            max_slots: rule.max_slots,
            booking_opens_days_before: rule.booking_opens_days_before,
            booking_opens_time: rule.booking_opens_time,
            booking_closes_days_before: rule.booking_closes_days_before,
            booking_closes_time: rule.booking_closes_time,
            timezone: rule.timezone,
            updated_at: Utc::now(),
        };
        state.templates.insert(season_id, template.clone());

        Ok(template)
    }

    async fn upsert_tee_times(
        &self,
        drafts: Vec<TeeTimeDraft>,
    ) -> Result<GenerateSummary, AppError> {
        let mut state = self.state.lock().await;
        let mut summary = GenerateSummary::default();
        let now = Utc::now();

        for draft in drafts {
            let existing_id = state.tee_time_keys.get(&(draft.date, draft.time)).copied();
            match existing_id {
                Some(id) => {
                    let reserved = state.reserved_on(id);
                    if let Some(existing) = state.tee_times.get_mut(&id) {
                        existing.season_id = draft.season_id;
                        existing.max_slots = draft.max_slots.max(reserved);
                        existing.booking_opens_at = draft.window.opens_at;
                        existing.booking_closes_at = draft.window.closes_at;
                        existing.is_available = true;
                        existing.updated_at = now;
                    }
                    summary.updated += 1;
                }
                None => {
                    let tee_time = new_tee_time(draft, now);
                    state
                        .tee_time_keys
                        .insert((tee_time.date, tee_time.time), tee_time.id);
                    state.tee_times.insert(tee_time.id, tee_time);
                    summary.created += 1;
                }
            }
        }

        Ok(summary)
    }

    async fn insert_tee_time(&self, draft: TeeTimeDraft) -> Result<TeeTimeInstance, AppError> {
        let mut state = self.state.lock().await;
        if state.tee_time_keys.contains_key(&(draft.date, draft.time)) {
            return Err(AppError::Conflict(format!(
                "A tee time already exists on {} at {}",
                draft.date, draft.time
            )));
        }

        let tee_time = new_tee_time(draft, Utc::now());
        state
            .tee_time_keys
            .insert((tee_time.date, tee_time.time), tee_time.id);
        state.tee_times.insert(tee_time.id, tee_time.clone());

        Ok(tee_time)
    }

    async fn get_tee_time(&self, tee_time_id: Uuid) -> Result<Option<TeeTimeInstance>, AppError> {
        Ok(self.state.lock().await.tee_times.get(&tee_time_id).cloned())
    }

    async fn tee_times_on(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<TeeTimeWithReservations>, AppError> {
        let state = self.state.lock().await;
        let mut entries: Vec<TeeTimeWithReservations> = state
            .tee_times
            .values()
            .filter(|t| t.date == date)
            .map(|t| TeeTimeWithReservations {
                tee_time: t.clone(),
                reservations: state.reservations_on(t.id),
            })
            .collect();
        entries.sort_by_key(|e| e.tee_time.time);

        Ok(entries)
    }

    async fn tee_times_for_season(
        &self,
        season_id: i32,
    ) -> Result<Vec<TeeTimeInstance>, AppError> {
        let state = self.state.lock().await;
        let mut tee_times: Vec<TeeTimeInstance> = state
            .tee_times
            .values()
            .filter(|t| t.season_id == season_id)
            .cloned()
            .collect();
        tee_times.sort_by_key(|t| (t.date, t.time));

        Ok(tee_times)
    }

    async fn set_tee_time_available(
        &self,
        tee_time_id: Uuid,
        is_available: bool,
    ) -> Result<Option<TeeTimeInstance>, AppError> {
        let mut state = self.state.lock().await;
        Ok(state.tee_times.get_mut(&tee_time_id).map(|tee_time| {
            tee_time.is_available = is_available;
            tee_time.updated_at = Utc::now();
            tee_time.clone()
        }))
    }

    async fn admit_reservation(
        &self,
        request: &ReservationRequest,
        now: DateTime<Utc>,
    ) -> Result<Admission, AppError> {
        let mut state = self.state.lock().await;

        let tee_time = state
            .tee_times
            .get(&request.tee_time_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("Tee time {} not found", request.tee_time_id))
            })?;

        if let Some(key) = request.idempotency_key {
            if let Some(existing) = state
                .reservations
                .iter()
                .find(|r| r.user_id == request.user_id && r.idempotency_key == Some(key))
            {
                return replay_existing(existing.clone(), request).map(Admission::Admitted);
            }
        }

        let reserved = state.reserved_on(tee_time.id);
        if let Err(rejection) = decide(&tee_time, reserved, request.slots, now) {
            return Ok(Admission::Rejected(rejection));
        }

        let reservation = Reservation {
            id: Uuid::new_v4(),
            tee_time_id: tee_time.id,
            user_id: request.user_id,
            slots: request.slots,
            player_names: request.player_names.clone(),
            play_for_money: request.play_for_money.clone(),
            idempotency_key: request.idempotency_key,
            created_at: Utc::now(),
        };
        state.reservations.push(reservation.clone());

        Ok(Admission::Admitted(reservation))
    }

    async fn get_reservation(
        &self,
        reservation_id: Uuid,
    ) -> Result<Option<Reservation>, AppError> {
        let state = self.state.lock().await;
        Ok(state
            .reservations
            .iter()
            .find(|r| r.id == reservation_id)
            .cloned())
    }

    async fn delete_reservation(&self, reservation_id: Uuid) -> Result<bool, AppError> {
        let mut state = self.state.lock().await;
        let before = state.reservations.len();
        state.reservations.retain(|r| r.id != reservation_id);
        Ok(state.reservations.len() < before)
    }

    async fn reservations_for_user(
        &self,
        user_id: Uuid,
        season_id: i32,
    ) -> Result<Vec<Reservation>, AppError> {
        let state = self.state.lock().await;
        let mut reservations: Vec<(NaiveDate, NaiveTime, Reservation)> = state
            .reservations
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter_map(|r| {
                let tee_time = state.tee_times.get(&r.tee_time_id)?;
                (tee_time.season_id == season_id).then(|| (tee_time.date, tee_time.time, r.clone()))
            })
            .collect();
        reservations.sort_by_key(|(date, time, _)| (*date, *time));

        Ok(reservations.into_iter().map(|(_, _, r)| r).collect())
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.state.lock().await.users.get(&user_id).cloned())
    }

    async fn insert_round(&self, round: NewRound) -> Result<Round, AppError> {
        let created = Round {
            id: Uuid::new_v4(),
            season_id: round.season_id,
            user_id: round.user_id,
            played_on: round.played_on,
            score: round.score,
            created_at: Utc::now(),
        };
        self.state.lock().await.rounds.push(created.clone());

        Ok(created)
    }

    async fn rounds_for_season(&self, season_id: i32) -> Result<Vec<Round>, AppError> {
        let state = self.state.lock().await;
        Ok(state
            .rounds
            .iter()
            .filter(|r| r.season_id == season_id)
            .cloned()
            .collect())
    }
}

fn new_tee_time(draft: TeeTimeDraft, now: DateTime<Utc>) -> TeeTimeInstance {
    TeeTimeInstance {
        id: Uuid::new_v4(),
        season_id: draft.season_id,
        date: draft.date,
        time: draft.time,
        max_slots: draft.max_slots,
        booking_opens_at: draft.window.opens_at,
        booking_closes_at: draft.window.closes_at,
        is_available: true,
        created_at: now,
        updated_at: now,
    }
}
