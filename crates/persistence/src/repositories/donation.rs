//! Donation repository for database operations.

use sqlx::PgPool;

use domain::models::donation::{CreateDonationRequest, DonationStatus};

use crate::entities::DonationEntity;
use crate::metrics::QueryTimer;

/// Repository for the donations table. Insert only; payment status is
/// advanced outside this system.
#[derive(Clone)]
pub struct DonationRepository {
    pool: PgPool,
}

impl DonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a pledge with status `pending` and no transaction id.
    pub async fn create(
        &self,
        request: &CreateDonationRequest,
    ) -> Result<DonationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_donation");
        let result = sqlx::query_as::<_, DonationEntity>(
            r#"
            INSERT INTO donations (amount, phone_number, status)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(request.amount)
        .bind(&request.phone_number)
        .bind(DonationStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
