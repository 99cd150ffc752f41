//! Shared utilities for the Light Acapella backend.
//!
//! This crate provides the field-level checks used by request models on the
//! server and by the page forms before submission.

pub mod validation;
