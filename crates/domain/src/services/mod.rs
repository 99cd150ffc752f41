//! Page-state services and the record store contract.
//!
//! Everything here is independent of any UI framework. The page root owns a
//! [`PlaybackCoordinator`] and a [`ModalController`] and threads handles to
//! its children.

pub mod content;
pub mod forms;
pub mod modal;
pub mod playback;
pub mod record_store;

pub use content::{load_site_content, ContentOptions, ContentSource, SiteContent, Sourced};
pub use forms::{
    DonationForm, FormError, FormPhase, Notification, NotificationLevel, QuotationFields,
    QuotationForm, Submission,
};
pub use modal::{ModalContent, ModalController, ModalKind};
pub use playback::{
    format_time, AudioPlayer, AudioResource, MediaError, MockAudioResource, PlaybackCoordinator,
    PlaybackError, PlaybackHandle, TrackId,
};
pub use record_store::{CreatedResponse, InMemoryRecordStore, RecordStore, StoreError};
