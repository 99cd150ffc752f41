//! Postgres-backed record store.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use domain::models::donation::{CreateDonationRequest, Donation};
use domain::models::event::{CreateEventRequest, Event};
use domain::models::member::{CreateMemberRequest, Member};
use domain::models::quotation::{CreateQuotationRequest, QuotationRequest};
use domain::models::song::{CreateSongRequest, Song};
use domain::services::{RecordStore, StoreError};

use crate::metrics::{record_pool_metrics, QueryTimer};
use crate::repositories::{
    DonationRepository, EventRepository, MemberRepository, QuotationRepository, SongRepository,
};

/// Message returned for records the database refuses. The driver text names
/// constraints and columns, so it is only logged.
pub const REJECTED_MESSAGE: &str = "Record rejected";

/// Maps a Postgres error code and message onto the store contract.
fn map_database_error(code: Option<&str>, message: &str) -> StoreError {
    match code {
        Some(code @ ("23505" | "23514" | "23502" | "22P02")) => {
            warn!(code, error = message, "Record rejected by database");
            StoreError::Rejected(REJECTED_MESSAGE.to_string())
        }
        _ => StoreError::Database(message.to_string()),
    }
}

/// Maps a driver error onto the store contract.
///
/// Constraint and input-syntax violations reject the record; connection
/// trouble is reported as unavailability so callers can retry.
pub fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            map_database_error(db_err.code().as_deref(), &db_err.to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            StoreError::Decode(err.to_string())
        }
        _ => StoreError::Database(err.to_string()),
    }
}

/// `RecordStore` over the sqlx repositories.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
    events: EventRepository,
    songs: SongRepository,
    members: MemberRepository,
    quotations: QuotationRepository,
    donations: DonationRepository,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            songs: SongRepository::new(pool.clone()),
            members: MemberRepository::new(pool.clone()),
            quotations: QuotationRepository::new(pool.clone()),
            donations: DonationRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl RecordStore for PgRecordStore {
    async fn ping(&self) -> Result<(), StoreError> {
        let timer = QueryTimer::new("ping");
        let result = sqlx::query("SELECT 1").execute(&self.pool).await;
        timer.record();
        record_pool_metrics(&self.pool);
        result.map(|_| ()).map_err(map_sqlx_error)
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, StoreError> {
        let rows = self.events.find_all().await.map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Uuid, StoreError> {
        let row = self.events.create(&request).await.map_err(map_sqlx_error)?;
        Ok(row.id)
    }

    async fn list_songs(&self) -> Result<Vec<Song>, StoreError> {
        let rows = self.songs.find_all().await.map_err(map_sqlx_error)?;
        rows.into_iter().map(Song::try_from).collect()
    }

    async fn songs_by_category(&self, category: &str) -> Result<Vec<Song>, StoreError> {
        let rows = self
            .songs
            .find_by_category(category)
            .await
            .map_err(map_sqlx_error)?;
        rows.into_iter().map(Song::try_from).collect()
    }

    async fn create_song(&self, request: CreateSongRequest) -> Result<Uuid, StoreError> {
        let row = self.songs.create(&request).await.map_err(map_sqlx_error)?;
        Ok(row.id)
    }

    async fn list_members(&self) -> Result<Vec<Member>, StoreError> {
        let rows = self.members.find_all().await.map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn create_member(&self, request: CreateMemberRequest) -> Result<Uuid, StoreError> {
        let row = self.members.create(&request).await.map_err(map_sqlx_error)?;
        Ok(row.id)
    }

    async fn list_quotations(&self) -> Result<Vec<QuotationRequest>, StoreError> {
        let rows = self.quotations.find_all().await.map_err(map_sqlx_error)?;
        rows.into_iter().map(QuotationRequest::try_from).collect()
    }

    async fn create_quotation(
        &self,
        request: CreateQuotationRequest,
    ) -> Result<Uuid, StoreError> {
        let row = self
            .quotations
            .create(&request)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.id)
    }

    async fn create_donation(&self, request: CreateDonationRequest) -> Result<Uuid, StoreError> {
        let row = self
            .donations
            .create(&request)
            .await
            .map_err(map_sqlx_error)?;
        let donation = Donation::try_from(row)?;
        info!(
            donation_id = %donation.id,
            status = donation.status.as_str(),
            "Donation row inserted"
        );
        Ok(donation.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_constraint_violations_hide_driver_text() {
        let message = "new row for relation \"donations\" violates check constraint \"donations_amount_check\"";
        for code in ["23505", "23514", "23502", "22P02"] {
            match map_database_error(Some(code), message) {
                StoreError::Rejected(text) => {
                    assert_eq!(text, REJECTED_MESSAGE);
                    assert!(!text.contains("donations_amount_check"));
                }
                other => panic!("Expected Rejected for {}, got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_unknown_database_codes_are_database() {
        assert!(matches!(
            map_database_error(Some("42P01"), "relation does not exist"),
            StoreError::Database(_)
        ));
        assert!(matches!(
            map_database_error(None, "connection reset"),
            StoreError::Database(_)
        ));
    }

    #[test]
    fn test_other_errors_are_database() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::Protocol("bad frame".to_string())),
            StoreError::Database(_)
        ));
    }
}
