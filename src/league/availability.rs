use chrono::{DateTime, Utc};

use crate::models::{
    reservation::Reservation,
    tee_time::{Availability, TeeTimeAvailability, TeeTimeInstance, TeeTimeWithReservations},
};

pub fn reserved_slots(reservations: &[Reservation]) -> i32 {
    reservations.iter().map(|r| r.slots).sum()
}

/// Remaining capacity given a reserved count. Never negative.
pub fn available_slots(tee_time: &TeeTimeInstance, reserved: i32) -> i32 {
    (tee_time.max_slots - reserved).max(0)
}

pub fn availability_from_reserved(
    tee_time: &TeeTimeInstance,
    reserved: i32,
    now: DateTime<Utc>,
) -> Availability {
    let available = available_slots(tee_time, reserved);

    Availability {
        reserved_slots: reserved,
        available_slots: available,
        is_bookable: tee_time.is_available && available > 0 && tee_time.window().contains(now),
    }
}

/// Read-side projection of a tee time's capacity. Recompute on every read;
/// admission decisions take their own count under the tee-time lock.
pub fn availability(
    tee_time: &TeeTimeInstance,
    reservations: &[Reservation],
    now: DateTime<Utc>,
) -> Availability {
    availability_from_reserved(tee_time, reserved_slots(reservations), now)
}

pub fn summarize(entries: &[TeeTimeWithReservations], now: DateTime<Utc>) -> Vec<TeeTimeAvailability> {
    let mut summary: Vec<TeeTimeAvailability> = entries
        .iter()
        .map(|entry| {
            let tee_time = &entry.tee_time;
            let computed = availability(tee_time, &entry.reservations, now);

            TeeTimeAvailability {
                tee_time_id: tee_time.id,
                date: tee_time.date,
                time_slot: tee_time.time,
                max_slots: tee_time.max_slots,
                reserved_slots: computed.reserved_slots,
                available_slots: computed.available_slots,
                is_bookable: computed.is_bookable,
                is_available: tee_time.is_available,
                booking_opens_at: tee_time.booking_opens_at,
                booking_closes_at: tee_time.booking_closes_at,
            }
        })
        .collect();

    summary.sort_by_key(|a| (a.date, a.time_slot));
    summary
}
