use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub tee_time_id: Uuid,
    pub user_id: Uuid,
    pub slots: i32,
    pub player_names: Vec<String>,
    pub play_for_money: Vec<bool>,
    pub idempotency_key: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub tee_time_id: Uuid,
    pub user_id: Uuid,
    pub slots: i32,
    pub player_names: Vec<String>,
    pub play_for_money: Vec<bool>,
    pub idempotency_key: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RejectionReason {
    OutsideBookingWindow,
    InstanceDisabled,
    InsufficientCapacity,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRejection {
    pub reason: RejectionReason,
    pub available_slots: i32,
}

impl fmt::Display for AdmissionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RejectionReason::OutsideBookingWindow => {
                write!(f, "Booking is not open for this tee time")
            }
            RejectionReason::InstanceDisabled => {
                write!(f, "This tee time is not available for booking")
            }
            RejectionReason::InsufficientCapacity => write!(
                f,
                "Only {} slot(s) left for this tee time",
                self.available_slots
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted(Reservation),
    Rejected(AdmissionRejection),
}
