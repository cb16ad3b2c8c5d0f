mod common;

use chrono::{Duration, Utc};
use common::{
    date, may_window, mid_may, request, seed_active_season, seed_season, seed_tee_time, seed_user,
    time, utc,
};
use golf_league_be::{
    db::{memory::MemoryStore, store::LeagueStore},
    errors::AppError,
    league::{
        admission::admit,
        availability::{availability, available_slots, summarize},
        tee_times::{availability_for_date, create_tee_time, list_for_season, set_availability},
    },
    models::{
        reservation::{Admission, Reservation},
        tee_time::{NewTeeTime, TeeTimeInstance, TeeTimeWithReservations},
    },
};
use uuid::Uuid;

fn tee_time(max_slots: i32, is_available: bool) -> TeeTimeInstance {
    let window = may_window();
    TeeTimeInstance {
        id: Uuid::new_v4(),
        season_id: 1,
        date: date(2025, 6, 6),
        time: time(15, 40),
        max_slots,
        booking_opens_at: window.opens_at,
        booking_closes_at: window.closes_at,
        is_available,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn reservation(tee_time_id: Uuid, slots: i32) -> Reservation {
    Reservation {
        id: Uuid::new_v4(),
        tee_time_id,
        user_id: Uuid::new_v4(),
        slots,
        player_names: (1..slots).map(|n| format!("Guest {n}")).collect(),
        play_for_money: vec![false; slots as usize],
        idempotency_key: None,
        created_at: Utc::now(),
    }
}

#[test]
fn test_three_of_four_reserved_leaves_one() {
    let tee = tee_time(4, true);
    let reservations = vec![reservation(tee.id, 2), reservation(tee.id, 1)];

    let computed = availability(&tee, &reservations, mid_may());
    assert_eq!(computed.reserved_slots, 3);
    assert_eq!(computed.available_slots, 1);
    assert!(computed.is_bookable);
}

#[test]
fn test_full_tee_time_is_not_bookable() {
    let tee = tee_time(4, true);
    let reservations = vec![reservation(tee.id, 4)];

    let computed = availability(&tee, &reservations, mid_may());
    assert_eq!(computed.available_slots, 0);
    assert!(!computed.is_bookable);
}

#[test]
fn test_available_slots_never_negative() {
    // Capacity lowered below what was already booked
    let tee = tee_time(2, true);
    assert_eq!(available_slots(&tee, 3), 0);

    let computed = availability(&tee, &[reservation(tee.id, 3)], mid_may());
    assert_eq!(computed.reserved_slots, 3);
    assert_eq!(computed.available_slots, 0);
}

#[test]
fn test_disabled_tee_time_is_not_bookable() {
    let tee = tee_time(4, false);
    let computed = availability(&tee, &[], mid_may());
    assert_eq!(computed.available_slots, 4);
    assert!(!computed.is_bookable);
}

#[test]
fn test_bookability_follows_window() {
    let tee = tee_time(4, true);
    let window = tee.window();

    assert!(!availability(&tee, &[], window.opens_at - Duration::seconds(1)).is_bookable);
    assert!(availability(&tee, &[], window.opens_at).is_bookable);
    assert!(availability(&tee, &[], window.closes_at - Duration::seconds(1)).is_bookable);
    assert!(!availability(&tee, &[], window.closes_at).is_bookable);
}

#[test]
fn test_summary_is_ordered_by_time() {
    let mut late = tee_time(4, true);
    late.time = time(16, 0);
    let early = tee_time(4, true);

    let entries = vec![
        TeeTimeWithReservations {
            reservations: vec![reservation(late.id, 2)],
            tee_time: late.clone(),
        },
        TeeTimeWithReservations {
            reservations: vec![],
            tee_time: early.clone(),
        },
    ];

    let summary = summarize(&entries, mid_may());
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].tee_time_id, early.id);
    assert_eq!(summary[1].tee_time_id, late.id);
    assert_eq!(summary[1].reserved_slots, 2);
    assert_eq!(summary[1].available_slots, 2);
}

#[tokio::test]
async fn test_availability_for_date_reflects_bookings() {
    let store = MemoryStore::new();
    let season = seed_active_season(&store).await;
    let tee = seed_tee_time(&store, season.id, 4, may_window()).await;
    let user = seed_user(&store, false).await;

    let outcome = admit(&store, request(tee.id, user, 3), mid_may()).await.unwrap();
    assert!(matches!(outcome, Admission::Admitted(_)));

    let summary = availability_for_date(&store, date(2025, 6, 6), mid_may()).await.unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].reserved_slots, 3);
    assert_eq!(summary[0].available_slots, 1);
    assert!(summary[0].is_bookable);

    // Read again after the window closed: same counts, no longer bookable
    let after_close = availability_for_date(&store, date(2025, 6, 6), utc("2025-06-02T00:00:00Z"))
        .await
        .unwrap();
    assert_eq!(after_close[0].available_slots, 1);
    assert!(!after_close[0].is_bookable);

    assert!(
        availability_for_date(&store, date(2025, 6, 7), mid_may())
            .await
            .unwrap()
            .is_empty()
    );

    store.set_tee_time_available(tee.id, false).await.unwrap();
    let disabled = availability_for_date(&store, date(2025, 6, 6), mid_may()).await.unwrap();
    assert!(!disabled[0].is_available);
    assert!(!disabled[0].is_bookable);
}

fn manual_tee_time(day: chrono::NaiveDate, at: &str) -> NewTeeTime {
    NewTeeTime {
        date: day,
        time: at.to_string(),
        max_slots: 4,
        booking_opens_days_before: 7,
        booking_opens_time: "21:00".into(),
        booking_closes_days_before: 1,
        booking_closes_time: "18:00".into(),
        timezone: "America/New_York".into(),
    }
}

#[tokio::test]
async fn test_manual_tee_time_entry() {
    let store = MemoryStore::new();
    let season = seed_active_season(&store).await;

    let created = create_tee_time(&store, manual_tee_time(date(2025, 7, 3), "09:30"))
        .await
        .unwrap();
    assert_eq!(created.season_id, season.id);
    assert_eq!(created.time, time(9, 30));
    assert!(created.is_available);
    // 2025-06-26 21:00 EDT and 2025-07-02 18:00 EDT
    assert_eq!(created.booking_opens_at, utc("2025-06-27T01:00:00Z"));
    assert_eq!(created.booking_closes_at, utc("2025-07-02T22:00:00Z"));

    let duplicate = create_tee_time(&store, manual_tee_time(date(2025, 7, 3), "09:30:00")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let off_season = create_tee_time(&store, manual_tee_time(date(2025, 12, 1), "09:30")).await;
    assert!(matches!(off_season, Err(AppError::Validation(_))));

    let mut oversized = manual_tee_time(date(2025, 7, 3), "10:00");
    oversized.max_slots = 17;
    assert!(matches!(
        create_tee_time(&store, oversized).await,
        Err(AppError::Validation(_))
    ));

    let listed = list_for_season(&store, season.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(matches!(
        list_for_season(&store, 999).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_availability_toggle() {
    let store = MemoryStore::new();
    let season = seed_active_season(&store).await;
    let tee = seed_tee_time(&store, season.id, 4, may_window()).await;

    let disabled = set_availability(&store, tee.id, false).await.unwrap();
    assert!(!disabled.is_available);

    let enabled = set_availability(&store, tee.id, true).await.unwrap();
    assert!(enabled.is_available);

    assert!(matches!(
        set_availability(&store, Uuid::new_v4(), false).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_manual_tee_time_with_overlapping_seasons() {
    let store = MemoryStore::new();
    let spring = seed_season(&store, "Spring", date(2025, 4, 1), date(2025, 7, 31)).await;
    let summer = seed_season(&store, "Summer", date(2025, 6, 1), date(2025, 9, 30)).await;

    let ambiguous = create_tee_time(&store, manual_tee_time(date(2025, 7, 3), "09:30")).await;
    assert!(matches!(ambiguous, Err(AppError::Validation(_))));

    let only_spring = create_tee_time(&store, manual_tee_time(date(2025, 5, 2), "09:30"))
        .await
        .unwrap();
    assert_eq!(only_spring.season_id, spring.id);

    store.activate_season(spring.id).await.unwrap();
    let overlap = create_tee_time(&store, manual_tee_time(date(2025, 7, 3), "09:30"))
        .await
        .unwrap();
    assert_eq!(overlap.season_id, spring.id);

    store.activate_season(summer.id).await.unwrap();
    let later = create_tee_time(&store, manual_tee_time(date(2025, 7, 10), "09:30"))
        .await
        .unwrap();
    assert_eq!(later.season_id, summer.id);
}
