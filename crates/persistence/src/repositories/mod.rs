//! Repository implementations for database operations.

pub mod donation;
pub mod event;
pub mod member;
pub mod quotation;
pub mod song;

pub use donation::DonationRepository;
pub use event::EventRepository;
pub use member::MemberRepository;
pub use quotation::QuotationRepository;
pub use song::SongRepository;
