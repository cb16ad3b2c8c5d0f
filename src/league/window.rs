use chrono::{DateTime, Days, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::{errors::AppError, models::tee_time::BookingWindow};

// A DST gap is never longer than this in the tz database.
const MAX_GAP_MINUTES: i64 = 180;

/// Parses a wall-clock time written as `HH:MM` or `HH:MM:SS`.
pub fn parse_wall_clock(value: &str) -> Result<NaiveTime, AppError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| {
            AppError::Validation(format!(
                "Invalid time '{value}'. Expected HH:MM or HH:MM:SS"
            ))
        })
}

pub fn parse_timezone(name: &str) -> Result<Tz, AppError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::Validation(format!("Unknown timezone '{name}'")))
}

/// Resolves a wall-clock reading in `tz` to a UTC instant.
///
/// Ambiguous readings (clocks falling back) take the earlier instant. Readings
/// that fall in a spring-forward gap resolve to the first valid instant after
/// the gap.
pub fn local_to_utc(date: NaiveDate, time: NaiveTime, tz: Tz) -> Result<DateTime<Utc>, AppError> {
    let local = date.and_time(time);

    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let minute_start = local
                .with_second(0)
                .and_then(|dt| dt.with_nanosecond(0))
                .unwrap_or(local);

            (1..=MAX_GAP_MINUTES)
                .find_map(|minutes| {
                    tz.from_local_datetime(&(minute_start + chrono::Duration::minutes(minutes)))
                        .earliest()
                })
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| {
                    AppError::Validation(format!("{local} does not exist in {}", tz.name()))
                })
        }
    }
}

/// Booking open/close offsets of a template or manual tee time, parsed and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRule {
    pub opens_days_before: i32,
    pub opens_time: NaiveTime,
    pub closes_days_before: i32,
    pub closes_time: NaiveTime,
    pub timezone: Tz,
}

impl WindowRule {
    pub fn new(
        opens_days_before: i32,
        opens_time: NaiveTime,
        closes_days_before: i32,
        closes_time: NaiveTime,
        timezone: Tz,
    ) -> Result<Self, AppError> {
        if opens_days_before < 0 || closes_days_before < 0 {
            return Err(AppError::Validation(
                "Booking day offsets cannot be negative".into(),
            ));
        }

        if opens_days_before <= closes_days_before {
            return Err(AppError::Validation(format!(
                "Booking must open before it closes: opens {opens_days_before} day(s) before, closes {closes_days_before} day(s) before"
            )));
        }

        Ok(Self {
            opens_days_before,
            opens_time,
            closes_days_before,
            closes_time,
            timezone,
        })
    }

    pub fn parse(
        opens_days_before: i32,
        opens_time: &str,
        closes_days_before: i32,
        closes_time: &str,
        timezone: &str,
    ) -> Result<Self, AppError> {
        Self::new(
            opens_days_before,
            parse_wall_clock(opens_time)?,
            closes_days_before,
            parse_wall_clock(closes_time)?,
            parse_timezone(timezone)?,
        )
    }

    pub fn window_for(&self, event_date: NaiveDate) -> Result<BookingWindow, AppError> {
        let opens_date = days_before(event_date, self.opens_days_before)?;
        let closes_date = days_before(event_date, self.closes_days_before)?;

        Ok(BookingWindow {
            opens_at: local_to_utc(opens_date, self.opens_time, self.timezone)?,
            closes_at: local_to_utc(closes_date, self.closes_time, self.timezone)?,
        })
    }
}

fn days_before(date: NaiveDate, days: i32) -> Result<NaiveDate, AppError> {
    u64::try_from(days)
        .ok()
        .and_then(|days| date.checked_sub_days(Days::new(days)))
        .ok_or_else(|| AppError::Validation(format!("{days} day(s) before {date} is out of range")))
}

/// Computes the UTC instants at which booking opens and closes for a tee time
/// played on `event_date`.
pub fn compute_window(
    event_date: NaiveDate,
    opens_days_before: i32,
    opens_time: &str,
    closes_days_before: i32,
    closes_time: &str,
    timezone: &str,
) -> Result<BookingWindow, AppError> {
    WindowRule::parse(
        opens_days_before,
        opens_time,
        closes_days_before,
        closes_time,
        timezone,
    )?
    .window_for(event_date)
}
