use chrono::{Datelike, Days, NaiveDate, NaiveTime};
use std::collections::HashSet;

use crate::{
    db::store::LeagueStore,
    errors::AppError,
    league::window::{WindowRule, parse_timezone, parse_wall_clock},
    models::{
        schedule::{GenerateSummary, ScheduleTemplate, TemplateInput, TemplateRule},
        season::{Season, SeasonRange},
        tee_time::TeeTimeDraft,
    },
};

pub const MAX_SLOTS_PER_TEE_TIME: i32 = 16;

/// Lazily walks every `(date, time)` a weekly rule produces inside a season,
/// date-ascending then time-ascending. Clone it to restart.
#[derive(Debug, Clone)]
pub struct TemplateExpansion {
    next_date: Option<NaiveDate>,
    end: NaiveDate,
    time_slots: Vec<NaiveTime>,
    slot_index: usize,
}

impl Iterator for TemplateExpansion {
    type Item = (NaiveDate, NaiveTime);

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next_date.filter(|date| *date <= self.end)?;
        let time = *self.time_slots.get(self.slot_index)?;

        self.slot_index += 1;
        if self.slot_index == self.time_slots.len() {
            self.slot_index = 0;
            self.next_date = date.checked_add_days(Days::new(7));
        }

        Some((date, time))
    }
}

/// `day_of_week` counts from Sunday = 0.
pub fn expand(day_of_week: i16, time_slots: &[NaiveTime], range: SeasonRange) -> TemplateExpansion {
    let mut slots = time_slots.to_vec();
    slots.sort();
    slots.dedup();

    TemplateExpansion {
        next_date: first_weekday_on_or_after(range.start, day_of_week),
        end: range.end,
        time_slots: slots,
        slot_index: 0,
    }
}

fn first_weekday_on_or_after(start: NaiveDate, day_of_week: i16) -> Option<NaiveDate> {
    if !(0..=6).contains(&day_of_week) {
        return None;
    }

    let current = i64::from(start.weekday().num_days_from_sunday());
    let offset = (i64::from(day_of_week) - current).rem_euclid(7);
    start.checked_add_days(Days::new(offset as u64))
}

pub fn validate_template(input: &TemplateInput) -> Result<TemplateRule, AppError> {
    if !(0..=6).contains(&input.day_of_week) {
        return Err(AppError::Validation(format!(
            "Day of week must be 0 (Sunday) to 6 (Saturday), got {}",
            input.day_of_week
        )));
    }

    if input.time_slots.is_empty() {
        return Err(AppError::Validation(
            "A template needs at least one time slot".into(),
        ));
    }

    let mut seen = HashSet::new();
    let mut time_slots = Vec::with_capacity(input.time_slots.len());
    for raw in &input.time_slots {
        let slot = parse_wall_clock(raw)?;
        if !seen.insert(slot) {
            return Err(AppError::Validation(format!(
                "Time slot {} is listed more than once",
                slot.format("%H:%M")
            )));
        }
        time_slots.push(slot);
    }
    time_slots.sort();

    validate_max_slots(input.max_slots)?;

    let window = WindowRule::new(
        input.booking_opens_days_before,
        parse_wall_clock(&input.booking_opens_time)?,
        input.booking_closes_days_before,
        parse_wall_clock(&input.booking_closes_time)?,
        parse_timezone(&input.timezone)?,
    )?;

    Ok(TemplateRule {
        day_of_week: input.day_of_week,
        time_slots,
        max_slots: input.max_slots,
        booking_opens_days_before: window.opens_days_before,
        booking_opens_time: window.opens_time,
        booking_closes_days_before: window.closes_days_before,
        booking_closes_time: window.closes_time,
        timezone: window.timezone.name().to_string(),
    })
}

pub fn validate_max_slots(max_slots: i32) -> Result<(), AppError> {
    if !(1..=MAX_SLOTS_PER_TEE_TIME).contains(&max_slots) {
        return Err(AppError::Validation(format!(
            "Max slots must be between 1 and {MAX_SLOTS_PER_TEE_TIME}, got {max_slots}"
        )));
    }
    Ok(())
}

/// Expands a rule over the season and stamps each tee time with its window.
pub fn plan_tee_times(season: &Season, rule: &TemplateRule) -> Result<Vec<TeeTimeDraft>, AppError> {
    let window = WindowRule::new(
        rule.booking_opens_days_before,
        rule.booking_opens_time,
        rule.booking_closes_days_before,
        rule.booking_closes_time,
        parse_timezone(&rule.timezone)?,
    )?;

    expand(rule.day_of_week, &rule.time_slots, season.range())
        .map(|(date, time)| {
            window.window_for(date).map(|window| TeeTimeDraft {
                season_id: season.id,
                date,
                time,
                max_slots: rule.max_slots,
                window,
            })
        })
        .collect()
}

pub async fn save_template(
    store: &dyn LeagueStore,
    season_id: i32,
    input: TemplateInput,
) -> Result<ScheduleTemplate, AppError> {
    let rule = validate_template(&input)?;

    store
        .get_season(season_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Season {season_id} not found")))?;

    let template = store.put_template(season_id, rule).await?;
    tracing::info!(
        "Saved schedule template {} for season {} (day {}, {} slot(s))",
        template.id,
        season_id,
        template.day_of_week,
        template.time_slots.len()
    );

    Ok(template)
}

/// Regenerates the season's tee times from its template. Safe to repeat:
/// rows are keyed by `(date, time)`.
pub async fn generate_schedule(
    store: &dyn LeagueStore,
    season_id: i32,
) -> Result<GenerateSummary, AppError> {
    let season = store
        .get_season(season_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Season {season_id} not found")))?;

    let template = store.get_template(season_id).await?.ok_or_else(|| {
        AppError::NotFound(format!("Season {season_id} has no schedule template"))
    })?;

    let drafts = plan_tee_times(&season, &TemplateRule::from(&template))?;
    if drafts.is_empty() {
        return Err(AppError::EmptySchedule(format!(
            "No day {} falls between {} and {}",
            template.day_of_week, season.start_date, season.end_date
        )));
    }

    let summary = store.upsert_tee_times(drafts).await?;
    tracing::info!(
        "Generated schedule for season {}: {} created, {} updated",
        season.id,
        summary.created,
        summary.updated
    );

    Ok(summary)
}
