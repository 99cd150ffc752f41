//! Quotation request repository for database operations.

use sqlx::PgPool;

use domain::models::quotation::{CreateQuotationRequest, QuotationStatus};

use crate::entities::QuotationEntity;
use crate::metrics::QueryTimer;

/// Repository for the quotation_requests table.
#[derive(Clone)]
pub struct QuotationRepository {
    pool: PgPool,
}

impl QuotationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a request with status `pending`.
    pub async fn create(
        &self,
        request: &CreateQuotationRequest,
    ) -> Result<QuotationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_quotation");
        let result = sqlx::query_as::<_, QuotationEntity>(
            r#"
            INSERT INTO quotation_requests (full_name, phone, email, event_type, event_date,
                                            location, guest_count, duration,
                                            amplification_needed, specific_songs,
                                            special_requests, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&request.full_name)
        .bind(&request.phone)
        .bind(&request.email)
        .bind(&request.event_type)
        .bind(&request.event_date)
        .bind(&request.location)
        .bind(&request.guest_count)
        .bind(&request.duration)
        .bind(request.amplification_needed)
        .bind(&request.specific_songs)
        .bind(&request.special_requests)
        .bind(QuotationStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All requests, newest first.
    pub async fn find_all(&self) -> Result<Vec<QuotationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_quotations");
        let result = sqlx::query_as::<_, QuotationEntity>(
            r#"
            SELECT * FROM quotation_requests ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
