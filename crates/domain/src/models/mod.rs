//! Domain models for the Light Acapella site.

pub mod donation;
pub mod event;
pub mod member;
pub mod quotation;
pub mod song;

pub use donation::Donation;
pub use event::Event;
pub use member::Member;
pub use quotation::QuotationRequest;
pub use song::Song;
