//! HTTP client for the record store API.
//!
//! Lets a page or tool use a remote deployment through the same
//! [`RecordStore`] contract as the local stores.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use domain::models::donation::CreateDonationRequest;
use domain::models::event::{CreateEventRequest, Event, ListEventsResponse};
use domain::models::member::{CreateMemberRequest, ListMembersResponse, Member};
use domain::models::quotation::{CreateQuotationRequest, ListQuotationsResponse, QuotationRequest};
use domain::models::song::{CreateSongRequest, ListSongsResponse, Song};
use domain::services::{CreatedResponse, RecordStore, StoreError};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// `RecordStore` backed by a running API at `base_url`.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: Client,
    base_url: Url,
}

impl HttpRecordStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::Rejected(format!("invalid base URL: {}", e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::Rejected(format!("invalid path {}: {}", path, e)))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Record store response");

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(status_error(status, message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, StoreError> {
        self.send(self.client.get(url)).await
    }

    async fn create<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Uuid, StoreError> {
        let created: CreatedResponse = self
            .send(self.client.post(self.url(path)?).json(body))
            .await?;
        Ok(created.id)
    }
}

fn transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        StoreError::Unavailable(err.to_string())
    } else {
        StoreError::Database(err.to_string())
    }
}

fn status_error(status: StatusCode, message: String) -> StoreError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => StoreError::Rejected(message),
        StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT
        | StatusCode::BAD_GATEWAY
        | StatusCode::REQUEST_TIMEOUT => StoreError::Unavailable(message),
        _ => StoreError::Database(format!("HTTP {}: {}", status.as_u16(), message)),
    }
}

#[async_trait::async_trait]
impl RecordStore for HttpRecordStore {
    async fn ping(&self) -> Result<(), StoreError> {
        let _: serde_json::Value = self.get(self.url("/api/health/ready")?).await?;
        Ok(())
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, StoreError> {
        let list: ListEventsResponse = self.get(self.url("/api/v1/events")?).await?;
        Ok(list.events)
    }

    async fn create_event(&self, request: CreateEventRequest) -> Result<Uuid, StoreError> {
        self.create("/api/v1/events", &request).await
    }

    async fn list_songs(&self) -> Result<Vec<Song>, StoreError> {
        let list: ListSongsResponse = self.get(self.url("/api/v1/songs")?).await?;
        Ok(list.songs)
    }

    async fn songs_by_category(&self, category: &str) -> Result<Vec<Song>, StoreError> {
        let mut url = self.url("/api/v1/songs")?;
        url.query_pairs_mut().append_pair("category", category);
        let list: ListSongsResponse = self.get(url).await?;
        Ok(list.songs)
    }

    async fn create_song(&self, request: CreateSongRequest) -> Result<Uuid, StoreError> {
        self.create("/api/v1/songs", &request).await
    }

    async fn list_members(&self) -> Result<Vec<Member>, StoreError> {
        let list: ListMembersResponse = self.get(self.url("/api/v1/members")?).await?;
        Ok(list.members)
    }

    async fn create_member(&self, request: CreateMemberRequest) -> Result<Uuid, StoreError> {
        self.create("/api/v1/members", &request).await
    }

    async fn list_quotations(&self) -> Result<Vec<QuotationRequest>, StoreError> {
        let list: ListQuotationsResponse = self.get(self.url("/api/v1/quotations")?).await?;
        Ok(list.quotations)
    }

    async fn create_quotation(
        &self,
        request: CreateQuotationRequest,
    ) -> Result<Uuid, StoreError> {
        self.create("/api/v1/quotations", &request).await
    }

    async fn create_donation(&self, request: CreateDonationRequest) -> Result<Uuid, StoreError> {
        self.create("/api/v1/donations", &request).await
    }
}
