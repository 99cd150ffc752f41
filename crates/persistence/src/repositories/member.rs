//! Member repository for database operations.

use sqlx::PgPool;

use domain::models::member::CreateMemberRequest;

use crate::entities::MemberEntity;
use crate::metrics::QueryTimer;

/// Repository for the members table.
#[derive(Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateMemberRequest) -> Result<MemberEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_member");
        let result = sqlx::query_as::<_, MemberEntity>(
            r#"
            INSERT INTO members (name, voice_part, image_url, years_with_group, testimony)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.voice_part)
        .bind(&request.image_url)
        .bind(request.years_with_group)
        .bind(&request.testimony)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_all(&self) -> Result<Vec<MemberEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_members");
        let result = sqlx::query_as::<_, MemberEntity>(
            r#"
            SELECT * FROM members ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
