//! HTTP route handlers.

pub mod donations;
pub mod events;
pub mod health;
pub mod members;
pub mod quotations;
pub mod site;
pub mod songs;
