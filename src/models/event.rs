use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::error::AppError;

/// Wire and storage format for event dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const EVENT_REQUIRED: &str = "The event name is required!";
const DATE_REQUIRED: &str =
    "The event date with the correct format is required! The correct format is YYYY-MM-DD!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub event: String,
    pub date: NaiveDate,
}

/// A validated event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub event: String,
    pub date: NaiveDate,
}

/// Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateEventRequest {
    pub event: Option<String>,
    pub date: Option<String>,
}

impl CreateEventRequest {
    pub fn validate(self) -> Result<NewEvent, AppError> {
        let event = self
            .event
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::field("event", EVENT_REQUIRED))?;

        let date = self
            .date
            .as_deref()
            .and_then(parse_date)
            .ok_or_else(|| AppError::field("date", DATE_REQUIRED))?;

        Ok(NewEvent { event, date })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EventRangeQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl EventRangeQuery {
    /// Returns a range only when both bounds are given; a lone bound is ignored
    /// but still has to be well formed.
    pub fn validate(self) -> Result<Option<DateRange>, AppError> {
        let start = parse_bound("start_time", self.start_time.as_deref())?;
        let end = parse_bound("end_time", self.end_time.as_deref())?;

        Ok(match (start, end) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        })
    }
}

fn parse_bound(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_date(raw).map(Some).ok_or_else(|| {
            AppError::field(
                field,
                format!("{} must be a date in the format YYYY-MM-DD", field),
            )
        }),
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

#[derive(Debug, Serialize)]
pub struct EventCreated {
    pub message: &'static str,
    pub id: i64,
    pub event: String,
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}
