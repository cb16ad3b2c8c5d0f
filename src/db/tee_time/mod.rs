pub mod get;
pub mod patch;
pub mod post;
pub mod put;

pub(crate) const TEE_TIME_COLUMNS: &str = "id, season_id, play_date AS date, start_time AS time, \
    max_slots, booking_opens_at, booking_closes_at, is_available, created_at, updated_at";
