use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    db::{SCHEDULE_LOCK, db_error},
    errors::AppError,
    models::{schedule::GenerateSummary, tee_time::TeeTimeDraft},
};

/// Upserts every draft by `(date, time)` in one transaction, holding the
/// schedule lock so regenerations never interleave.
pub async fn upsert_tee_times(
    drafts: Vec<TeeTimeDraft>,
    postgres: &PgPool,
) -> Result<GenerateSummary, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| db_error("Failed to start transaction", e))?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEDULE_LOCK)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to lock schedule generation", e))?;

    let mut summary = GenerateSummary::default();

    for draft in drafts {
        // Same row lock admissions take; waits out any admission in flight.
        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM tee_times WHERE play_date = $1 AND start_time = $2 FOR UPDATE",
        )
        .bind(draft.date)
        .bind(draft.time)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| db_error("Failed to lock tee time", e))?;

        match existing {
            Some(tee_time_id) => {
                update_tee_time(&mut tx, tee_time_id, &draft).await?;
                summary.updated += 1;
            }
            None => {
                insert_tee_time(&mut tx, &draft).await?;
                summary.created += 1;
            }
        }
    }

    tx.commit()
        .await
        .map_err(|e| db_error("Failed to commit schedule", e))?;

    Ok(summary)
}

async fn update_tee_time(
    tx: &mut Transaction<'_, Postgres>,
    tee_time_id: Uuid,
    draft: &TeeTimeDraft,
) -> Result<(), AppError> {
    // Separate statement: sees every reservation committed before the lock was granted.
    let reserved = sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(slots), 0) FROM reservations WHERE tee_time_id = $1",
    )
    .bind(tee_time_id)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| db_error("Failed to count reserved slots", e))?;

    let reserved = i32::try_from(reserved).map_err(|_| {
        AppError::DatabaseError(format!("Reserved slot count {reserved} out of range"))
    })?;

    sqlx::query(
        "UPDATE tee_times SET
            season_id = $2,
            max_slots = $3,
            booking_opens_at = $4,
            booking_closes_at = $5,
            is_available = TRUE,
            updated_at = NOW()
        WHERE id = $1",
    )
    .bind(tee_time_id)
    .bind(draft.season_id)
    .bind(draft.max_slots.max(reserved))
    .bind(draft.window.opens_at)
    .bind(draft.window.closes_at)
    .execute(&mut **tx)
    .await
    .map_err(|e| db_error("Failed to update tee time", e))?;

    Ok(())
}

async fn insert_tee_time(
    tx: &mut Transaction<'_, Postgres>,
    draft: &TeeTimeDraft,
) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO tee_times (
            id, season_id, play_date, start_time, max_slots,
            booking_opens_at, booking_closes_at, is_available
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)",
    )
    .bind(Uuid::new_v4())
    .bind(draft.season_id)
    .bind(draft.date)
    .bind(draft.time)
    .bind(draft.max_slots)
    .bind(draft.window.opens_at)
    .bind(draft.window.closes_at)
    .execute(&mut **tx)
    .await
    .map_err(|e| db_error("Failed to insert tee time", e))?;

    Ok(())
}
