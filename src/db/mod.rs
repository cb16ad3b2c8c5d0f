pub mod memory;
pub mod postgres;
pub mod reservation;
pub mod round;
pub mod schedule;
pub mod season;
pub mod store;
pub mod tee_time;
pub mod user;

use crate::errors::AppError;

// Transaction-scoped advisory lock keys.
pub const SEASON_SWAP_LOCK: i64 = 0x5EA5_0001;
pub const SCHEDULE_LOCK: i64 = 0x5EA5_0002;

/// Maps a driver error to `AppError`. Serialization failures, deadlocks and
/// unique violations become `Conflict`; the driver's text is only logged.
pub fn db_error(context: &str, err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        let message = match db_err.code().as_deref() {
            Some("40001" | "40P01") => "This record was changed concurrently, please try again",
            Some("23505") => "This record already exists",
            _ => return AppError::DatabaseError(format!("{context}: {err}")),
        };

        tracing::warn!("{}: {}", context, db_err.message());
        return AppError::Conflict(message.into());
    }

    AppError::DatabaseError(format!("{context}: {err}"))
}
