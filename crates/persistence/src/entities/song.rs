//! Song entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::song::{Song, SongCategory};
use domain::services::StoreError;

/// Database row mapping for the songs table.
#[derive(Debug, Clone, FromRow)]
pub struct SongEntity {
    pub id: Uuid,
    pub title: String,
    pub audio_url: String,
    pub duration: String,
    pub category: String,
    pub description: Option<String>,
    pub youtube_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<SongEntity> for Song {
    type Error = StoreError;

    fn try_from(entity: SongEntity) -> Result<Self, Self::Error> {
        let category = SongCategory::parse(&entity.category).ok_or_else(|| {
            StoreError::Decode(format!("unknown song category '{}'", entity.category))
        })?;
        Ok(Self {
            id: entity.id,
            title: entity.title,
            audio_url: entity.audio_url,
            duration: entity.duration,
            category,
            description: entity.description,
            youtube_id: entity.youtube_id,
            created_at: entity.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(category: &str) -> SongEntity {
        SongEntity {
            id: Uuid::new_v4(),
            title: "Ngoika Ka Nka".to_string(),
            audio_url: "/audio/ngoika.mp3".to_string(),
            duration: "5:18".to_string(),
            category: category.to_string(),
            description: None,
            youtube_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_song_entity_to_domain() {
        let song = Song::try_from(entity("original")).unwrap();
        assert_eq!(song.category, SongCategory::Original);
        assert_eq!(song.duration, "5:18");
    }

    #[test]
    fn test_song_entity_unknown_category() {
        let err = Song::try_from(entity("remix")).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
