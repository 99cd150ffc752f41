//! Donation entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::donation::{Donation, DonationStatus};
use domain::services::StoreError;

/// Database row mapping for the donations table.
#[derive(Debug, Clone, FromRow)]
pub struct DonationEntity {
    pub id: Uuid,
    pub amount: f64,
    pub phone_number: String,
    pub status: String,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DonationEntity> for Donation {
    type Error = StoreError;

    fn try_from(entity: DonationEntity) -> Result<Self, Self::Error> {
        let status = DonationStatus::parse(&entity.status).ok_or_else(|| {
            StoreError::Decode(format!("unknown donation status '{}'", entity.status))
        })?;
        Ok(Self {
            id: entity.id,
            amount: entity.amount,
            phone_number: entity.phone_number,
            status,
            transaction_id: entity.transaction_id,
            created_at: entity.created_at,
        })
    }
}
