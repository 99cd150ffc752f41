//! Quotation request entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::quotation::{QuotationRequest, QuotationStatus};
use domain::services::StoreError;

/// Database row mapping for the quotation_requests table.
#[derive(Debug, Clone, FromRow)]
pub struct QuotationEntity {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
    pub event_date: String,
    pub location: String,
    pub guest_count: Option<String>,
    pub duration: Option<String>,
    pub amplification_needed: bool,
    pub specific_songs: Option<String>,
    pub special_requests: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<QuotationEntity> for QuotationRequest {
    type Error = StoreError;

    fn try_from(entity: QuotationEntity) -> Result<Self, Self::Error> {
        let status = QuotationStatus::parse(&entity.status).ok_or_else(|| {
            StoreError::Decode(format!("unknown quotation status '{}'", entity.status))
        })?;
        Ok(Self {
            id: entity.id,
            full_name: entity.full_name,
            phone: entity.phone,
            email: entity.email,
            event_type: entity.event_type,
            event_date: entity.event_date,
            location: entity.location,
            guest_count: entity.guest_count,
            duration: entity.duration,
            amplification_needed: entity.amplification_needed,
            specific_songs: entity.specific_songs,
            special_requests: entity.special_requests,
            status,
            created_at: entity.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn entity(status: &str) -> QuotationEntity {
        QuotationEntity {
            id: Uuid::new_v4(),
            full_name: Name().fake(),
            phone: "0712345678".to_string(),
            email: "guest@example.com".to_string(),
            event_type: "corporate".to_string(),
            event_date: "2024-05-01".to_string(),
            location: "Serena Hotel, Nairobi".to_string(),
            guest_count: Some("120".to_string()),
            duration: Some("45-60 minutes".to_string()),
            amplification_needed: true,
            specific_songs: None,
            special_requests: None,
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_quotation_entity_to_domain() {
        let row = entity("pending");
        let quotation = QuotationRequest::try_from(row.clone()).unwrap();
        assert_eq!(quotation.full_name, row.full_name);
        assert_eq!(quotation.status, QuotationStatus::Pending);
        assert_eq!(quotation.guest_count.as_deref(), Some("120"));
    }

    #[test]
    fn test_quotation_entity_unknown_status() {
        assert!(QuotationRequest::try_from(entity("archived")).is_err());
    }
}
