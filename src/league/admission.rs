use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    db::store::LeagueStore,
    errors::AppError,
    league::availability::available_slots,
    models::{
        reservation::{
            Admission, AdmissionRejection, RejectionReason, Reservation, ReservationRequest,
        },
        tee_time::TeeTimeInstance,
    },
};

pub const MAX_PLAYER_NAME_LEN: usize = 80;

/// Checks the shape of a request before it reaches the store.
pub fn validate_request(request: &ReservationRequest) -> Result<(), AppError> {
    if request.slots < 1 {
        return Err(AppError::Validation(
            "A reservation needs at least one slot".into(),
        ));
    }

    let guests = (request.slots - 1) as usize;
    if request.player_names.len() != guests {
        return Err(AppError::Validation(format!(
            "Expected {guests} player name(s) for {} slot(s), got {}",
            request.slots,
            request.player_names.len()
        )));
    }

    if request.play_for_money.len() != request.slots as usize {
        return Err(AppError::Validation(format!(
            "Expected {} play-for-money flag(s), got {}",
            request.slots,
            request.play_for_money.len()
        )));
    }

    for name in &request.player_names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Player names cannot be blank".into()));
        }
        if trimmed.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(AppError::Validation(format!(
                "Player names are limited to {MAX_PLAYER_NAME_LEN} characters"
            )));
        }
    }

    Ok(())
}

/// The admission rules, applied in order: booking window, admin override,
/// capacity. `reserved` must be counted in the same atomic unit that will
/// insert the reservation.
pub fn decide(
    tee_time: &TeeTimeInstance,
    reserved: i32,
    requested_slots: i32,
    now: DateTime<Utc>,
) -> Result<(), AdmissionRejection> {
    let available = available_slots(tee_time, reserved);
    let reject = |reason| AdmissionRejection {
        reason,
        available_slots: available,
    };

    if !tee_time.window().contains(now) {
        return Err(reject(RejectionReason::OutsideBookingWindow));
    }

    if !tee_time.is_available {
        return Err(reject(RejectionReason::InstanceDisabled));
    }

    if requested_slots > available {
        return Err(reject(RejectionReason::InsufficientCapacity));
    }

    Ok(())
}

/// Matches a retried request to the reservation already stored under its
/// idempotency key. A key reused for a different booking is rejected.
pub fn replay_existing(
    existing: Reservation,
    request: &ReservationRequest,
) -> Result<Reservation, AppError> {
    if existing.tee_time_id != request.tee_time_id || existing.slots != request.slots {
        return Err(AppError::Validation(
            "This idempotency key was already used for a different booking".into(),
        ));
    }
    Ok(existing)
}

pub async fn admit(
    store: &dyn LeagueStore,
    request: ReservationRequest,
    now: DateTime<Utc>,
) -> Result<Admission, AppError> {
    store
        .get_tee_time(request.tee_time_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tee time {} not found", request.tee_time_id)))?;

    validate_request(&request)?;

    let outcome = match store.admit_reservation(&request, now).await {
        Err(AppError::Conflict(reason)) => {
            tracing::warn!(
                "Admission for tee time {} lost a race ({}), retrying once",
                request.tee_time_id,
                reason
            );
            store.admit_reservation(&request, now).await?
        }
        other => other?,
    };

    match &outcome {
        Admission::Admitted(reservation) => tracing::info!(
            "Admitted reservation {} for user {} on tee time {} ({} slot(s))",
            reservation.id,
            reservation.user_id,
            reservation.tee_time_id,
            reservation.slots
        ),
        Admission::Rejected(rejection) => tracing::info!(
            "Rejected reservation for user {} on tee time {}: {:?} ({} slot(s) left)",
            request.user_id,
            request.tee_time_id,
            rejection.reason,
            rejection.available_slots
        ),
    }

    Ok(outcome)
}

/// Deletes a reservation when the requester owns it or is an admin.
pub async fn cancel_reservation(
    store: &dyn LeagueStore,
    reservation_id: Uuid,
    requester_id: Uuid,
) -> Result<Reservation, AppError> {
    let reservation = store
        .get_reservation(reservation_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reservation {reservation_id} not found")))?;

    if reservation.user_id != requester_id {
        let is_admin = store
            .get_user(requester_id)
            .await?
            .is_some_and(|user| user.is_admin);

        if !is_admin {
            return Err(AppError::Forbidden(
                "Only the booking player or an admin can cancel this reservation".into(),
            ));
        }
    }

    if !store.delete_reservation(reservation_id).await? {
        return Err(AppError::NotFound(format!(
            "Reservation {reservation_id} not found"
        )));
    }

    tracing::info!(
        "Reservation {} cancelled by {} (tee time {})",
        reservation.id,
        requester_id,
        reservation.tee_time_id
    );

    Ok(reservation)
}
