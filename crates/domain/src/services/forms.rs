//! Form submission state machines for the quotation and donation forms.
//!
//! A form buffers its fields while `Editing`. Submitting runs the client-side
//! checks first; a failed check reports a validation notification and never
//! reaches the store. While a create is in flight the form is `Submitting`
//! and refuses a second submit. A failed create keeps the typed input so the
//! user can retry.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared::validation::{parse_amount, validate_required};

use crate::models::donation::{CreateDonationRequest, PRESET_AMOUNTS};
use crate::models::quotation::CreateQuotationRequest;
use crate::services::record_store::{RecordStore, StoreError};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount";
pub const QUOTATION_SUCCESS_MESSAGE: &str =
    "Quotation request submitted successfully! We'll contact you within 24 hours.";
pub const QUOTATION_FAILURE_MESSAGE: &str = "Failed to submit request. Please try again.";
pub const DONATION_SUCCESS_MESSAGE: &str =
    "Donation request submitted! You will receive an M-Pesa prompt shortly.";
pub const DONATION_FAILURE_MESSAGE: &str = "Failed to process donation. Please try again.";

/// Lifecycle phase of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient toast shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Outcome of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    pub notification: Notification,
}

/// Why a submit did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Validation failed on {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Submission already in progress")]
    AlreadySubmitting,

    #[error("No submission in progress")]
    NotSubmitting,

    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl FormError {
    fn missing(field: &'static str) -> Self {
        FormError::Validation {
            field,
            message: REQUIRED_FIELDS_MESSAGE.to_string(),
        }
    }

    /// Toast to show for this failure, if any. A rejected double submit and
    /// a stale store answer are silent.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            FormError::Validation { message, .. } => Some(Notification::error(message.clone())),
            FormError::AlreadySubmitting | FormError::NotSubmitting => None,
            FormError::Store { message, .. } => Some(Notification::error(*message)),
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    validate_required(value).map_err(|_| FormError::missing(field))
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Buffered input of the quotation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotationFields {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub event_type: String,
    pub event_date: String,
    pub location: String,
    pub guest_count: String,
    pub duration: String,
    pub amplification_needed: bool,
    pub specific_songs: String,
    pub special_requests: String,
}

impl QuotationFields {
    /// Builds the create payload; blank optional fields are sent as absent.
    pub fn to_request(&self) -> Result<CreateQuotationRequest, FormError> {
        require("fullName", &self.full_name)?;
        require("phone", &self.phone)?;
        require("email", &self.email)?;
        require("eventType", &self.event_type)?;
        require("eventDate", &self.event_date)?;
        require("location", &self.location)?;

        Ok(CreateQuotationRequest {
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            event_type: self.event_type.trim().to_string(),
            event_date: self.event_date.trim().to_string(),
            location: self.location.trim().to_string(),
            guest_count: optional(&self.guest_count),
            duration: optional(&self.duration),
            amplification_needed: self.amplification_needed,
            specific_songs: optional(&self.specific_songs),
            special_requests: optional(&self.special_requests),
        })
    }
}

/// The "Request a Quotation" form.
#[derive(Debug, Clone, Default)]
pub struct QuotationForm {
    fields: QuotationFields,
    phase: FormPhase,
}

impl QuotationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn fields(&self) -> &QuotationFields {
        &self.fields
    }

    /// Editable field buffer. Editing a settled form returns it to `Editing`.
    pub fn fields_mut(&mut self) -> &mut QuotationFields {
        if matches!(self.phase, FormPhase::Failed | FormPhase::Succeeded) {
            self.phase = FormPhase::Editing;
        }
        &mut self.fields
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Runs the client-side checks and enters `Submitting`.
    pub fn begin_submit(&mut self) -> Result<CreateQuotationRequest, FormError> {
        if self.phase == FormPhase::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        let request = self.fields.to_request()?;
        self.phase = FormPhase::Submitting;
        Ok(request)
    }

    /// Applies the store's answer to an in-flight submit. An answer arriving
    /// outside `Submitting` is dropped and leaves the form untouched.
    pub fn finish_submit(&mut self, result: Result<Uuid, StoreError>) -> Result<Submission, FormError> {
        if self.phase != FormPhase::Submitting {
            debug!(phase = ?self.phase, "Ignoring quotation result outside a submit");
            return Err(FormError::NotSubmitting);
        }
        match result {
            Ok(id) => {
                self.phase = FormPhase::Succeeded;
                self.fields = QuotationFields::default();
                info!(quotation_id = %id, "Quotation request submitted");
                Ok(Submission {
                    id,
                    notification: Notification::success(QUOTATION_SUCCESS_MESSAGE),
                })
            }
            Err(source) => {
                self.phase = FormPhase::Failed;
                warn!(error = %source, "Quotation request failed");
                Err(FormError::Store {
                    message: QUOTATION_FAILURE_MESSAGE,
                    source,
                })
            }
        }
    }

    pub async fn submit(&mut self, store: &dyn RecordStore) -> Result<Submission, FormError> {
        let request = self.begin_submit()?;
        let result = store.create_quotation(request).await;
        self.finish_submit(result)
    }
}

/// The "Support Our Ministry" donation form.
#[derive(Debug, Clone, Default)]
pub struct DonationForm {
    amount: String,
    phone_number: String,
    selected_preset: Option<u32>,
    phase: FormPhase,
}

impl DonationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Preset button currently highlighted.
    pub fn selected_preset(&self) -> Option<u32> {
        self.selected_preset
    }

    pub fn presets(&self) -> &'static [u32] {
        &PRESET_AMOUNTS
    }

    fn touch(&mut self) {
        if matches!(self.phase, FormPhase::Failed | FormPhase::Succeeded) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Fills the amount from a preset button.
    pub fn select_preset(&mut self, amount: u32) {
        self.touch();
        self.amount = amount.to_string();
        self.selected_preset = Some(amount);
    }

    /// Typing a custom amount clears any preset selection.
    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.touch();
        self.amount = amount.into();
        self.selected_preset = None;
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.touch();
        self.phone_number = phone_number.into();
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn begin_submit(&mut self) -> Result<CreateDonationRequest, FormError> {
        if self.phase == FormPhase::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        require("amount", &self.amount)?;
        require("phoneNumber", &self.phone_number)?;
        let amount = parse_amount(&self.amount).ok_or_else(|| FormError::Validation {
            field: "amount",
            message: INVALID_AMOUNT_MESSAGE.to_string(),
        })?;

        self.phase = FormPhase::Submitting;
        Ok(CreateDonationRequest {
            amount,
            phone_number: self.phone_number.trim().to_string(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<Uuid, StoreError>) -> Result<Submission, FormError> {
        if self.phase != FormPhase::Submitting {
            debug!(phase = ?self.phase, "Ignoring donation result outside a submit");
            return Err(FormError::NotSubmitting);
        }
        match result {
            Ok(id) => {
                self.phase = FormPhase::Succeeded;
                self.amount.clear();
                self.phone_number.clear();
                self.selected_preset = None;
                info!(donation_id = %id, "Donation pledge submitted");
                Ok(Submission {
                    id,
                    notification: Notification::success(DONATION_SUCCESS_MESSAGE),
                })
            }
            Err(source) => {
                self.phase = FormPhase::Failed;
                warn!(error = %source, "Donation pledge failed");
                Err(FormError::Store {
                    message: DONATION_FAILURE_MESSAGE,
                    source,
                })
            }
        }
    }

    pub async fn submit(&mut self, store: &dyn RecordStore) -> Result<Submission, FormError> {
        let request = self.begin_submit()?;
        let result = store.create_donation(request).await;
        self.finish_submit(result)
    }
}
