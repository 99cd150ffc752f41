//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod donation;
pub mod event;
pub mod member;
pub mod quotation;
pub mod song;

pub use donation::DonationEntity;
pub use event::EventEntity;
pub use member::MemberEntity;
pub use quotation::QuotationEntity;
pub use song::SongEntity;
