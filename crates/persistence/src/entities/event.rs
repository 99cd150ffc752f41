//! Event entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::Event;

/// Database row mapping for the events table.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
    pub id: Uuid,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub event_type: String,
    pub status: String,
    pub description: Option<String>,
    pub attendance_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<EventEntity> for Event {
    fn from(entity: EventEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            date: entity.date,
            time: entity.time,
            location: entity.location,
            event_type: entity.event_type,
            status: entity.status,
            description: entity.description,
            attendance_link: entity.attendance_link,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_entity_to_domain() {
        let entity = EventEntity {
            id: Uuid::new_v4(),
            title: "Youth Conference 2024".to_string(),
            date: "2024-04-05".to_string(),
            time: "7:00 PM".to_string(),
            location: "Adventist University of Africa".to_string(),
            event_type: "Conference".to_string(),
            status: "tentative".to_string(),
            description: None,
            attendance_link: Some("https://example.com/rsvp".to_string()),
            created_at: Utc::now(),
        };
        let event: Event = entity.clone().into();

        assert_eq!(event.id, entity.id);
        assert_eq!(event.event_type, "Conference");
        assert_eq!(event.status, "tentative");
        assert_eq!(event.attendance_link, entity.attendance_link);
    }
}
