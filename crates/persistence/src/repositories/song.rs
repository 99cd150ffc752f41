//! Song repository for database operations.

use sqlx::PgPool;

use domain::models::song::CreateSongRequest;

use crate::entities::SongEntity;
use crate::metrics::QueryTimer;

/// Repository for the songs table.
#[derive(Clone)]
pub struct SongRepository {
    pool: PgPool,
}

impl SongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateSongRequest) -> Result<SongEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_song");
        let result = sqlx::query_as::<_, SongEntity>(
            r#"
            INSERT INTO songs (title, audio_url, duration, category, description, youtube_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.audio_url)
        .bind(&request.duration)
        .bind(request.category.as_str())
        .bind(&request.description)
        .bind(&request.youtube_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_all(&self) -> Result<Vec<SongEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_songs");
        let result = sqlx::query_as::<_, SongEntity>(
            r#"
            SELECT * FROM songs ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Songs whose category column equals `category`.
    pub async fn find_by_category(&self, category: &str) -> Result<Vec<SongEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_songs_by_category");
        let result = sqlx::query_as::<_, SongEntity>(
            r#"
            SELECT * FROM songs WHERE category = $1 ORDER BY created_at ASC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
