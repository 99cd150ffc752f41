//! Event repository for database operations.

use sqlx::PgPool;

use domain::models::event::CreateEventRequest;

use crate::entities::EventEntity;
use crate::metrics::QueryTimer;

/// Repository for the events table.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Creates a new EventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an event; id and created_at come from column defaults.
    pub async fn create(&self, request: &CreateEventRequest) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            INSERT INTO events (title, date, time, location, event_type, status,
                                description, attendance_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.date)
        .bind(&request.time)
        .bind(&request.location)
        .bind(&request.event_type)
        .bind(&request.status)
        .bind(&request.description)
        .bind(&request.attendance_link)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All events in insertion order. Date ordering happens after retrieval
    /// because `date` is stored as free text.
    pub async fn find_all(&self) -> Result<Vec<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_events");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            SELECT * FROM events ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
