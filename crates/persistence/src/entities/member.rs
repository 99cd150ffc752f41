//! Member entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::Member;

/// Database row mapping for the members table.
#[derive(Debug, Clone, FromRow)]
pub struct MemberEntity {
    pub id: Uuid,
    pub name: String,
    pub voice_part: String,
    pub image_url: String,
    pub years_with_group: i32,
    pub testimony: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MemberEntity> for Member {
    fn from(entity: MemberEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            voice_part: entity.voice_part,
            image_url: entity.image_url,
            years_with_group: entity.years_with_group,
            testimony: entity.testimony,
            created_at: entity.created_at,
        }
    }
}
