pub mod get;
pub mod put;

pub(crate) const TEMPLATE_COLUMNS: &str = "id, season_id, day_of_week, time_slots, max_slots, \
    booking_opens_days_before, booking_opens_time, booking_closes_days_before, \
    booking_closes_time, timezone, updated_at";
