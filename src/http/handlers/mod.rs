pub mod leaderboard;
pub mod reservation;
pub mod round;
pub mod schedule;
pub mod season;
pub mod tee_time;

use crate::errors::{ApiError, AppError};

/// Logs with context and converts to a response. Upstream failures are
/// logged as errors, caller mistakes as warnings.
pub(crate) fn respond_with(context: &str, err: AppError) -> ApiError {
    match err {
        AppError::DatabaseError(_) | AppError::EnvError(_) | AppError::InternalError => {
            tracing::error!("{}: {}", context, err)
        }
        _ => tracing::warn!("{}: {}", context, err),
    }
    err.to_response()
}
