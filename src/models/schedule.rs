use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTemplate {
    pub id: Uuid,
    pub season_id: i32,
    /// 0 = Sunday ... 6 = Saturday
    pub day_of_week: i16,
    pub time_slots: Vec<NaiveTime>,
    pub max_slots: i32,
    pub booking_opens_days_before: i32,
    pub booking_opens_time: NaiveTime,
    pub booking_closes_days_before: i32,
    pub booking_closes_time: NaiveTime,
    pub timezone: String,
    pub updated_at: DateTime<Utc>,
}

/// Admin payload for a season's template. Times are wall-clock strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInput {
    pub day_of_week: i16,
    pub time_slots: Vec<String>,
    pub max_slots: i32,
    pub booking_opens_days_before: i32,
    pub booking_opens_time: String,
    pub booking_closes_days_before: i32,
    pub booking_closes_time: String,
    pub timezone: String,
}

/// Validated template fields, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRule {
    pub day_of_week: i16,
    pub time_slots: Vec<NaiveTime>,
    pub max_slots: i32,
    pub booking_opens_days_before: i32,
    pub booking_opens_time: NaiveTime,
    pub booking_closes_days_before: i32,
    pub booking_closes_time: NaiveTime,
    pub timezone: String,
}

impl From<&ScheduleTemplate> for TemplateRule {
    fn from(template: &ScheduleTemplate) -> Self {
        Self {
            day_of_week: template.day_of_week,
            time_slots: template.time_slots.clone(),
            max_slots: template.max_slots,
            booking_opens_days_before: template.booking_opens_days_before,
            booking_opens_time: template.booking_opens_time,
            booking_closes_days_before: template.booking_closes_days_before,
            booking_closes_time: template.booking_closes_time,
            timezone: template.timezone.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummary {
    pub created: u64,
    pub updated: u64,
}

impl GenerateSummary {
    pub fn total(&self) -> u64 {
        self.created + self.updated
    }
}
