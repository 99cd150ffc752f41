//! Event domain model.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shared::validation::parse_calendar_date;

/// A scheduled or past performance shown in the events section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Display time such as `"10:00 AM"`.
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Parsed calendar date, if the stored string is well formed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

/// Well-known event statuses.
///
/// The stored status is free text; unknown values are kept as-is and only
/// lose their colour key on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Confirmed,
    Tentative,
    Past,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Confirmed => "confirmed",
            EventStatus::Tentative => "tentative",
            EventStatus::Past => "past",
        }
    }

    /// Case-insensitive lookup of a stored status.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Some(EventStatus::Confirmed),
            "tentative" => Some(EventStatus::Tentative),
            "past" => Some(EventStatus::Past),
            _ => None,
        }
    }
}

/// Request payload for creating an event.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_link: Option<String>,
}

/// Response for listing events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
    pub total: usize,
}

/// Orders two events by calendar date.
///
/// Events whose date does not parse sort after every dated event.
fn compare_dates(a: &Event, b: &Event) -> Ordering {
    match (a.calendar_date(), b.calendar_date()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts events by date ascending, independent of retrieval order.
///
/// The sort is stable, so events on the same day keep their relative order.
pub fn sort_by_date(events: &mut [Event]) {
    events.sort_by(compare_dates);
}

/// Events dated `today` or later, earliest first, at most `limit` of them.
pub fn upcoming(events: &[Event], today: NaiveDate, limit: usize) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|e| e.calendar_date().is_some_and(|d| d >= today))
        .cloned()
        .collect();
    sort_by_date(&mut upcoming);
    upcoming.truncate(limit);
    upcoming
}
