#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use golf_league_be::{
    db::{memory::MemoryStore, store::LeagueStore},
    models::{
        User,
        reservation::ReservationRequest,
        season::{NewSeason, Season},
        tee_time::{BookingWindow, TeeTimeDraft, TeeTimeInstance},
    },
};
use uuid::Uuid;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

pub fn utc(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid RFC 3339 instant")
        .with_timezone(&Utc)
}

/// Window used by most admission tests: all of May 2025.
pub fn may_window() -> BookingWindow {
    BookingWindow {
        opens_at: utc("2025-05-01T00:00:00Z"),
        closes_at: utc("2025-06-01T00:00:00Z"),
    }
}

pub fn mid_may() -> DateTime<Utc> {
    utc("2025-05-15T12:00:00Z")
}

pub async fn seed_season(store: &MemoryStore, name: &str, start: NaiveDate, end: NaiveDate) -> Season {
    store
        .create_season(NewSeason {
            name: name.to_string(),
            year: start.format("%Y").to_string().parse().expect("year"),
            start_date: start,
            end_date: end,
        })
        .await
        .expect("season created")
}

pub async fn seed_active_season(store: &MemoryStore) -> Season {
    let season = seed_season(store, "2025", date(2025, 5, 23), date(2025, 8, 29)).await;
    store
        .activate_season(season.id)
        .await
        .expect("activate")
        .expect("season exists")
}

pub async fn seed_tee_time(
    store: &MemoryStore,
    season_id: i32,
    max_slots: i32,
    window: BookingWindow,
) -> TeeTimeInstance {
    store
        .insert_tee_time(TeeTimeDraft {
            season_id,
            date: date(2025, 6, 6),
            time: time(15, 40),
            max_slots,
            window,
        })
        .await
        .expect("tee time created")
}

pub async fn seed_user(store: &MemoryStore, is_admin: bool) -> Uuid {
    let id = Uuid::new_v4();
    store
        .add_user(User {
            id,
            display_name: Some(format!("Player {}", &id.to_string()[..8])),
            is_admin,
        })
        .await;
    id
}

pub fn request(tee_time_id: Uuid, user_id: Uuid, slots: i32) -> ReservationRequest {
    ReservationRequest {
        tee_time_id,
        user_id,
        slots,
        player_names: (1..slots).map(|n| format!("Guest {n}")).collect(),
        play_for_money: vec![false; slots.max(0) as usize],
        idempotency_key: None,
    }
}
