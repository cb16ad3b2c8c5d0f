pub mod delete;
pub mod get;
pub mod post;

pub(crate) const RESERVATION_COLUMNS: &str = "id, tee_time_id, user_id, slots, player_names, \
    play_for_money, idempotency_key, created_at";
