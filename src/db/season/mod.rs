pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub(crate) const SEASON_COLUMNS: &str =
    "id, name, year, start_date, end_date, is_active, created_at";
