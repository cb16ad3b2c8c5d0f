mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use chrono::{Duration as ChronoDuration, Utc};
use common::{date, seed_active_season, seed_user, time};
use golf_league_be::{
    auth::generate_jwt,
    build_router,
    db::{memory::MemoryStore, store::LeagueStore},
    models::tee_time::{BookingWindow, TeeTimeDraft, TeeTimeInstance},
    state::AppState,
};
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;
use uuid::Uuid;

const SECRET: &str = "test-secret";

fn app(store: &Arc<MemoryStore>) -> Router {
    build_router(
        AppState::new(store.clone(), SECRET),
        &["http://localhost:3000".to_string()],
        Duration::from_secs(10),
    )
}

fn token(user_id: Uuid) -> String {
    generate_jwt(user_id, SECRET).expect("token")
}

async fn send(app: Router, method: Method, uri: &str, bearer: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(bearer) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {bearer}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

/// A tee time whose booking window is open right now.
async fn open_tee_time(store: &MemoryStore, season_id: i32, max_slots: i32) -> TeeTimeInstance {
    let now = Utc::now();
    store
        .insert_tee_time(TeeTimeDraft {
            season_id,
            date: date(2025, 6, 6),
            time: time(15, 40),
            max_slots,
            window: BookingWindow {
                opens_at: now - ChronoDuration::hours(1),
                closes_at: now + ChronoDuration::hours(1),
            },
        })
        .await
        .expect("tee time")
}

fn booking(tee_time_id: Uuid, slots: usize) -> Value {
    json!({
        "teeTimeId": tee_time_id,
        "slots": slots,
        "playerNames": (1..slots).map(|n| format!("Guest {n}")).collect::<Vec<_>>(),
        "playForMoney": vec![true; slots],
    })
}

#[tokio::test]
async fn test_reservation_round_trip() {
    let store = Arc::new(MemoryStore::new());
    let season = seed_active_season(&store).await;
    let tee = open_tee_time(&store, season.id, 4).await;
    let user = seed_user(&store, false).await;
    let bearer = token(user);

    let (status, body) = send(
        app(&store),
        Method::POST,
        "/reservations",
        Some(&bearer),
        Some(booking(tee.id, 3)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["slots"], 3);
    assert_eq!(body["userId"], user.to_string());

    let (status, body) = send(app(&store), Method::GET, "/tee-times?date=2025-06-06", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["reservedSlots"], 3);
    assert_eq!(body[0]["availableSlots"], 1);
    assert_eq!(body[0]["isBookable"], true);

    let (status, body) = send(app(&store), Method::GET, "/reservations/me", Some(&bearer), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_capacity_rejection_is_conflict_with_reason() {
    let store = Arc::new(MemoryStore::new());
    let season = seed_active_season(&store).await;
    let tee = open_tee_time(&store, season.id, 4).await;
    let first = token(seed_user(&store, false).await);
    let second = token(seed_user(&store, false).await);

    let (status, _) = send(app(&store), Method::POST, "/reservations", Some(&first), Some(booking(tee.id, 3))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app(&store), Method::POST, "/reservations", Some(&second), Some(booking(tee.id, 2))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "rejected");
    assert_eq!(body["reason"], "insufficientCapacity");
    assert_eq!(body["availableSlots"], 1);
}

#[tokio::test]
async fn test_malformed_booking_is_bad_request() {
    let store = Arc::new(MemoryStore::new());
    let season = seed_active_season(&store).await;
    let tee = open_tee_time(&store, season.id, 4).await;
    let bearer = token(seed_user(&store, false).await);

    let payload = json!({
        "teeTimeId": tee.id,
        "slots": 2,
        "playerNames": [],
        "playForMoney": [false, false],
    });
    let (status, body) = send(app(&store), Method::POST, "/reservations", Some(&bearer), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
async fn test_booking_requires_token() {
    let store = Arc::new(MemoryStore::new());
    let season = seed_active_season(&store).await;
    let tee = open_tee_time(&store, season.id, 4).await;

    let (status, _) = send(app(&store), Method::POST, "/reservations", None, Some(booking(tee.id, 1))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        app(&store),
        Method::POST,
        "/reservations",
        Some("not-a-jwt"),
        Some(booking(tee.id, 1)),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let forged = generate_jwt(Uuid::new_v4(), "another-secret").expect("token");
    let (status, _) = send(app(&store), Method::POST, "/reservations", Some(&forged), Some(booking(tee.id, 1))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_require_admin() {
    let store = Arc::new(MemoryStore::new());
    let season = seed_active_season(&store).await;
    let player = token(seed_user(&store, false).await);
    let admin = token(seed_user(&store, true).await);
    let uri = format!("/season/{}/schedule", season.id);

    let (status, body) = send(app(&store), Method::POST, &uri, Some(&player), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");

    let template = json!({
        "dayOfWeek": 5,
        "timeSlots": ["15:40", "15:50"],
        "maxSlots": 4,
        "bookingOpensDaysBefore": 7,
        "bookingOpensTime": "21:00",
        "bookingClosesDaysBefore": 1,
        "bookingClosesTime": "18:00",
        "timezone": "America/New_York",
    });
    let template_uri = format!("/season/{}/template", season.id);
    let (status, _) = send(app(&store), Method::PUT, &template_uri, Some(&admin), Some(template)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app(&store), Method::POST, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], 30);
    assert_eq!(body["updated"], 0);

    let (status, body) = send(app(&store), Method::POST, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], 0);
    assert_eq!(body["updated"], 30);
}

#[tokio::test]
async fn test_empty_schedule_is_a_noop_success() {
    let store = Arc::new(MemoryStore::new());
    let admin = token(seed_user(&store, true).await);
    let season = common::seed_season(&store, "Short", date(2025, 5, 20), date(2025, 5, 22)).await;

    let template = json!({
        "dayOfWeek": 5,
        "timeSlots": ["15:40"],
        "maxSlots": 4,
        "bookingOpensDaysBefore": 7,
        "bookingOpensTime": "21:00",
        "bookingClosesDaysBefore": 1,
        "bookingClosesTime": "18:00",
        "timezone": "America/New_York",
    });
    let template_uri = format!("/season/{}/template", season.id);
    send(app(&store), Method::PUT, &template_uri, Some(&admin), Some(template)).await;

    let uri = format!("/season/{}/schedule", season.id);
    let (status, body) = send(app(&store), Method::POST, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "created": 0, "updated": 0 }));
}

#[tokio::test]
async fn test_active_season_endpoints() {
    let store = Arc::new(MemoryStore::new());

    let (status, body) = send(app(&store), Method::GET, "/season/active", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no_active_season");

    let season = seed_active_season(&store).await;
    let (status, body) = send(app(&store), Method::GET, "/season/active", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], season.id);
    assert_eq!(body["isActive"], true);
}

#[tokio::test]
async fn test_cancel_over_http() {
    let store = Arc::new(MemoryStore::new());
    let season = seed_active_season(&store).await;
    let tee = open_tee_time(&store, season.id, 4).await;
    let owner = token(seed_user(&store, false).await);
    let stranger = token(seed_user(&store, false).await);

    let (_, body) = send(app(&store), Method::POST, "/reservations", Some(&owner), Some(booking(tee.id, 2))).await;
    let reservation_id = body["id"].as_str().expect("reservation id").to_string();
    let uri = format!("/reservations/{reservation_id}");

    let (status, _) = send(app(&store), Method::DELETE, &uri, Some(&stranger), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(app(&store), Method::DELETE, &uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(app(&store), Method::DELETE, &uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
