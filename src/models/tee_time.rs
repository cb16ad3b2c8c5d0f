use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::reservation::Reservation;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeeTimeInstance {
    pub id: Uuid,
    pub season_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub max_slots: i32,
    pub booking_opens_at: DateTime<Utc>,
    pub booking_closes_at: DateTime<Utc>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeeTimeInstance {
    pub fn window(&self) -> BookingWindow {
        BookingWindow {
            opens_at: self.booking_opens_at,
            closes_at: self.booking_closes_at,
        }
    }
}

/// The UTC span during which a tee time can be reserved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingWindow {
    pub opens_at: DateTime<Utc>,
    pub closes_at: DateTime<Utc>,
}

impl BookingWindow {
    /// Half-open: `opens_at` is bookable, `closes_at` is not.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.opens_at <= now && now < self.closes_at
    }
}

/// A tee time to be inserted or upserted by `(date, time)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeeTimeDraft {
    pub season_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub max_slots: i32,
    pub window: BookingWindow,
}

/// Admin payload for a manually entered tee time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeeTime {
    pub date: NaiveDate,
    pub time: String,
    pub max_slots: i32,
    pub booking_opens_days_before: i32,
    pub booking_opens_time: String,
    pub booking_closes_days_before: i32,
    pub booking_closes_time: String,
    pub timezone: String,
}

#[derive(Debug, Clone)]
pub struct TeeTimeWithReservations {
    pub tee_time: TeeTimeInstance,
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub reserved_slots: i32,
    pub available_slots: i32,
    pub is_bookable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeeTimeAvailability {
    pub tee_time_id: Uuid,
    pub date: NaiveDate,
    pub time_slot: NaiveTime,
    pub max_slots: i32,
    pub reserved_slots: i32,
    pub available_slots: i32,
    pub is_bookable: bool,
    pub is_available: bool,
    pub booking_opens_at: DateTime<Utc>,
    pub booking_closes_at: DateTime<Utc>,
}
