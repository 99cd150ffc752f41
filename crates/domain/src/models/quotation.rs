//! Quotation request domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A booking inquiry submitted through the public form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationRequest {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
    pub event_date: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub amplification_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_songs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub status: QuotationStatus,
    pub created_at: DateTime<Utc>,
}

/// Follow-up status of a quotation request.
///
/// Only `Pending` is ever written here; the other states are set by the
/// back office.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    #[default]
    Pending,
    Contacted,
    Quoted,
    Booked,
}

impl QuotationStatus {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotationStatus::Pending => "pending",
            QuotationStatus::Contacted => "contacted",
            QuotationStatus::Quoted => "quoted",
            QuotationStatus::Booked => "booked",
        }
    }

    /// Parses from database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(QuotationStatus::Pending),
            "contacted" => Some(QuotationStatus::Contacted),
            "quoted" => Some(QuotationStatus::Quoted),
            "booked" => Some(QuotationStatus::Booked),
            _ => None,
        }
    }
}

/// Event types offered in the booking form, as `(value, label)`.
pub const EVENT_TYPE_OPTIONS: [(&str, &str); 6] = [
    ("wedding", "Wedding"),
    ("corporate", "Corporate Event"),
    ("church", "Church Service"),
    ("private", "Private Party"),
    ("outdoor", "Outdoor Event"),
    ("other", "Other"),
];

/// Performance lengths offered in the booking form.
pub const DURATION_OPTIONS: [&str; 5] = [
    "15-30 minutes",
    "30-45 minutes",
    "45-60 minutes",
    "60+ minutes",
    "flexible",
];

/// Request payload for submitting a quotation request.
///
/// Status is not accepted from callers; the store sets it to pending.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotationRequest {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
    pub event_date: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub amplification_needed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_songs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Response for listing quotation requests, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuotationsResponse {
    pub quotations: Vec<QuotationRequest>,
    pub total: usize,
}
