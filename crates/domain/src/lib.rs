//! Domain layer for the Light Acapella site.
//!
//! This crate contains:
//! - Domain models (Event, Song, Member, QuotationRequest, Donation)
//! - The record store contract and an in-memory store
//! - Page state: playback coordination, modals, forms, content fallback

pub mod models;
pub mod services;
