//! Record store contract.
//!
//! Five independent collections with list and create. Identity, creation
//! time and initial status are assigned by the store, never by callers.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::donation::{CreateDonationRequest, Donation, DonationStatus};
use crate::models::event::{self, CreateEventRequest, Event};
use crate::models::member::{CreateMemberRequest, Member};
use crate::models::quotation::{CreateQuotationRequest, QuotationRequest, QuotationStatus};
use crate::models::song::{self, CreateSongRequest, Song};

/// Failure of a store call. Always retryable from the caller's point of view;
/// a failed create never leaves a partial record behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    #[error("Record rejected: {0}")]
    Rejected(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Malformed record: {0}")]
    Decode(String),
}

/// Body returned by every create operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// The hosted record store as seen by the page and the HTTP layer.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Cheap connectivity check used by health probes.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Events in the store's native order.
    async fn fetch_events(&self) -> Result<Vec<Event>, StoreError>;

    /// Events sorted by date ascending, whatever order the store returned.
    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        let mut events = self.fetch_events().await?;
        event::sort_by_date(&mut events);
        Ok(events)
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Uuid, StoreError>;

    async fn list_songs(&self) -> Result<Vec<Song>, StoreError>;

    /// Songs whose category equals `category` exactly.
    async fn songs_by_category(&self, category: &str) -> Result<Vec<Song>, StoreError> {
        Ok(song::filter_by_category(self.list_songs().await?, category))
    }

    async fn create_song(&self, request: CreateSongRequest) -> Result<Uuid, StoreError>;

    async fn list_members(&self) -> Result<Vec<Member>, StoreError>;

    async fn create_member(&self, request: CreateMemberRequest) -> Result<Uuid, StoreError>;

    /// Quotation requests, newest first.
    async fn list_quotations(&self) -> Result<Vec<QuotationRequest>, StoreError>;

    /// Stores the request with status `pending`.
    async fn create_quotation(&self, request: CreateQuotationRequest)
        -> Result<Uuid, StoreError>;

    /// Stores the pledge with status `pending` and no transaction id.
    async fn create_donation(&self, request: CreateDonationRequest) -> Result<Uuid, StoreError>;
}

#[derive(Default)]
struct Collections {
    events: Vec<Event>,
    songs: Vec<Song>,
    members: Vec<Member>,
    quotations: Vec<QuotationRequest>,
    donations: Vec<Donation>,
}

/// In-memory record store for local runs and tests.
///
/// Collections keep insertion order. Failure can be switched on to exercise
/// retry paths; `create_calls` counts create attempts that reached the store.
#[derive(Default)]
pub struct InMemoryRecordStore {
    collections: RwLock<Collections>,
    simulate_failure: AtomicBool,
    create_calls: AtomicUsize,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every call fails as unavailable.
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    /// Toggle simulated unavailability.
    pub fn set_failing(&self, failing: bool) {
        self.simulate_failure.store(failing, Ordering::SeqCst);
    }

    /// Number of create calls received, successful or not.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// All stored donations in insertion order.
    pub async fn donations(&self) -> Vec<Donation> {
        self.collections.read().await.donations.clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            tracing::warn!("In-memory record store simulating failure");
            return Err(StoreError::Unavailable("Simulated failure".to_string()));
        }
        Ok(())
    }

    fn begin_create(&self) -> Result<(Uuid, chrono::DateTime<Utc>), StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok((Uuid::new_v4(), Utc::now()))
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, StoreError> {
        self.check_available()?;
        Ok(self.collections.read().await.events.clone())
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Uuid, StoreError> {
        let (id, created_at) = self.begin_create()?;
        self.collections.write().await.events.push(Event {
            id,
            title: request.title,
            date: request.date,
            time: request.time,
            location: request.location,
            event_type: request.event_type,
            status: request.status,
            description: request.description,
            attendance_link: request.attendance_link,
            created_at,
        });
        Ok(id)
    }

    async fn list_songs(&self) -> Result<Vec<Song>, StoreError> {
        self.check_available()?;
        Ok(self.collections.read().await.songs.clone())
    }

    async fn create_song(&self, request: CreateSongRequest) -> Result<Uuid, StoreError> {
        let (id, created_at) = self.begin_create()?;
        self.collections.write().await.songs.push(Song {
            id,
            title: request.title,
            audio_url: request.audio_url,
            duration: request.duration,
            category: request.category,
            description: request.description,
            youtube_id: request.youtube_id,
            created_at,
        });
        Ok(id)
    }

    async fn list_members(&self) -> Result<Vec<Member>, StoreError> {
        self.check_available()?;
        Ok(self.collections.read().await.members.clone())
    }

    async fn create_member(&self, request: CreateMemberRequest) -> Result<Uuid, StoreError> {
        let (id, created_at) = self.begin_create()?;
        self.collections.write().await.members.push(Member {
            id,
            name: request.name,
            voice_part: request.voice_part,
            image_url: request.image_url,
            years_with_group: request.years_with_group,
            testimony: request.testimony,
            created_at,
        });
        Ok(id)
    }

    async fn list_quotations(&self) -> Result<Vec<QuotationRequest>, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().await;
        Ok(collections.quotations.iter().rev().cloned().collect())
    }

    async fn create_quotation(
        &self,
        request: CreateQuotationRequest,
    ) -> Result<Uuid, StoreError> {
        let (id, created_at) = self.begin_create()?;
        self.collections.write().await.quotations.push(QuotationRequest {
            id,
            full_name: request.full_name,
            phone: request.phone,
            email: request.email,
            event_type: request.event_type,
            event_date: request.event_date,
            location: request.location,
            guest_count: request.guest_count,
            duration: request.duration,
            amplification_needed: request.amplification_needed,
            specific_songs: request.specific_songs,
            special_requests: request.special_requests,
            status: QuotationStatus::Pending,
            created_at,
        });
        Ok(id)
    }

    async fn create_donation(&self, request: CreateDonationRequest) -> Result<Uuid, StoreError> {
        let (id, created_at) = self.begin_create()?;
        self.collections.write().await.donations.push(Donation {
            id,
            amount: request.amount,
            phone_number: request.phone_number,
            status: DonationStatus::Pending,
            transaction_id: None,
            created_at,
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::song::SongCategory;

    fn event_request(title: &str, date: &str) -> CreateEventRequest {
        CreateEventRequest {
            title: title.to_string(),
            date: date.to_string(),
            time: "10:00 AM".to_string(),
            location: "Syokimau".to_string(),
            event_type: "Church Service".to_string(),
            status: "confirmed".to_string(),
            description: None,
            attendance_link: None,
        }
    }

    fn quotation_request(name: &str) -> CreateQuotationRequest {
        CreateQuotationRequest {
            full_name: name.to_string(),
            phone: "0712345678".to_string(),
            email: "guest@example.com".to_string(),
            event_type: "wedding".to_string(),
            event_date: "2024-06-15".to_string(),
            location: "Nairobi".to_string(),
            guest_count: None,
            duration: None,
            amplification_needed: false,
            specific_songs: None,
            special_requests: None,
        }
    }

    #[tokio::test]
    async fn test_list_events_sorted_by_date() {
        let store = InMemoryRecordStore::new();
        for (title, date) in [("A", "2024-04-05"), ("B", "2024-03-17"), ("C", "2024-04-12")] {
            store.create_event(event_request(title, date)).await.unwrap();
        }

        let native: Vec<String> = store
            .fetch_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(native, vec!["2024-04-05", "2024-03-17", "2024-04-12"]);

        let listed: Vec<String> = store
            .list_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(listed, vec!["2024-03-17", "2024-04-05", "2024-04-12"]);
    }

    #[tokio::test]
    async fn test_create_donation_is_pending_without_transaction() {
        let store = InMemoryRecordStore::new();
        let id = store
            .create_donation(CreateDonationRequest {
                amount: 1000.0,
                phone_number: "254712345678".to_string(),
            })
            .await
            .unwrap();

        let donations = store.donations().await;
        assert_eq!(donations.len(), 1);
        assert_eq!(donations[0].id, id);
        assert_eq!(donations[0].status, DonationStatus::Pending);
        assert!(donations[0].transaction_id.is_none());
        assert_eq!(donations[0].amount, 1000.0);
    }

    #[tokio::test]
    async fn test_quotations_newest_first_and_pending() {
        let store = InMemoryRecordStore::new();
        store.create_quotation(quotation_request("First")).await.unwrap();
        store.create_quotation(quotation_request("Second")).await.unwrap();

        let quotations = store.list_quotations().await.unwrap();
        assert_eq!(quotations[0].full_name, "Second");
        assert_eq!(quotations[1].full_name, "First");
        assert!(quotations
            .iter()
            .all(|q| q.status == QuotationStatus::Pending));
    }

    #[tokio::test]
    async fn test_songs_by_category() {
        let store = InMemoryRecordStore::new();
        for (title, category) in [
            ("The Rock", SongCategory::Original),
            ("Waymaker", SongCategory::Cover),
            ("Live Set", SongCategory::Live),
        ] {
            store
                .create_song(CreateSongRequest {
                    title: title.to_string(),
                    audio_url: String::new(),
                    duration: "4:00".to_string(),
                    category,
                    description: None,
                    youtube_id: None,
                })
                .await
                .unwrap();
        }

        let covers = store.songs_by_category("cover").await.unwrap();
        assert_eq!(covers.len(), 1);
        assert_eq!(covers[0].title, "Waymaker");
        assert!(store.songs_by_category("acoustic").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_store_persists_nothing() {
        let store = InMemoryRecordStore::failing();
        let result = store.create_quotation(quotation_request("Jane")).await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert_eq!(store.create_calls(), 1);

        store.set_failing(false);
        assert!(store.list_quotations().await.unwrap().is_empty());
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_create_member_assigns_identity() {
        let store = InMemoryRecordStore::new();
        let id = store
            .create_member(CreateMemberRequest {
                name: "Sydney".to_string(),
                voice_part: "Soprano".to_string(),
                image_url: "/images/sydney.jpg".to_string(),
                years_with_group: 3,
                testimony: None,
            })
            .await
            .unwrap();

        let members = store.list_members().await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, id);
        assert_ne!(id, Uuid::nil());
    }
}
