//! Persistence layer for the Light Acapella record store.
//!
//! This crate contains:
//! - Database connection management and embedded migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - `PgRecordStore`, the Postgres-backed `RecordStore`

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod store;

pub use store::PgRecordStore;
