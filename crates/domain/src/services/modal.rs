//! Modal controller: at most one of the booking or donation dialogs is open.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::forms::{DonationForm, FormError, QuotationForm, Submission};
use crate::services::record_store::RecordStore;

/// Dialogs the page can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    Quotation,
    Donation,
}

impl ModalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalKind::Quotation => "quotation",
            ModalKind::Donation => "donation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "quotation" => Some(ModalKind::Quotation),
            "donation" => Some(ModalKind::Donation),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::Quotation => "Request a Quotation",
            ModalKind::Donation => "Support Our Ministry",
        }
    }
}

/// Content mounted in the open dialog.
#[derive(Debug, Clone)]
pub enum ModalContent {
    Quotation(QuotationForm),
    Donation(DonationForm),
}

impl ModalContent {
    fn fresh(kind: ModalKind) -> Self {
        match kind {
            ModalKind::Quotation => ModalContent::Quotation(QuotationForm::new()),
            ModalKind::Donation => ModalContent::Donation(DonationForm::new()),
        }
    }

    pub fn kind(&self) -> ModalKind {
        match self {
            ModalContent::Quotation(_) => ModalKind::Quotation,
            ModalContent::Donation(_) => ModalKind::Donation,
        }
    }
}

/// Page-root state for the active dialog.
///
/// Content lives only while its dialog is open, so closing discards whatever
/// was typed and reopening starts from default fields.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    active: Option<ModalContent>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ModalKind> {
        self.active.as_ref().map(ModalContent::kind)
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.active() == Some(kind)
    }

    /// Opens `kind`, replacing any open dialog.
    pub fn open(&mut self, kind: ModalKind) {
        if let Some(previous) = self.active() {
            debug!(from = previous.as_str(), to = kind.as_str(), "Replacing open modal");
        }
        self.active = Some(ModalContent::fresh(kind));
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.active.as_ref()
    }

    pub fn quotation_form(&mut self) -> Option<&mut QuotationForm> {
        match self.active.as_mut() {
            Some(ModalContent::Quotation(form)) => Some(form),
            _ => None,
        }
    }

    pub fn donation_form(&mut self) -> Option<&mut DonationForm> {
        match self.active.as_mut() {
            Some(ModalContent::Donation(form)) => Some(form),
            _ => None,
        }
    }

    /// Submits the open form; the dialog closes on success and stays open with
    /// its input on failure. Returns `None` when nothing is open.
    pub async fn submit_active(
        &mut self,
        store: &dyn RecordStore,
    ) -> Option<Result<Submission, FormError>> {
        let result = match self.active.as_mut()? {
            ModalContent::Quotation(form) => form.submit(store).await,
            ModalContent::Donation(form) => form.submit(store).await,
        };
        if result.is_ok() {
            self.close();
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::forms::FormPhase;
    use crate::services::record_store::InMemoryRecordStore;

    #[test]
    fn test_open_replaces_active_modal() {
        let mut modals = ModalController::new();
        modals.open(ModalKind::Quotation);
        assert!(modals.is_open(ModalKind::Quotation));

        modals.open(ModalKind::Donation);
        assert_eq!(modals.active(), Some(ModalKind::Donation));
        assert!(modals.quotation_form().is_none());
    }

    #[test]
    fn test_close_discards_buffered_input() {
        let mut modals = ModalController::new();
        modals.open(ModalKind::Quotation);
        modals
            .quotation_form()
            .unwrap()
            .fields_mut()
            .full_name = "Jane Wanjiru".to_string();

        modals.close();
        assert_eq!(modals.active(), None);

        modals.open(ModalKind::Quotation);
        assert!(modals.quotation_form().unwrap().fields().full_name.is_empty());
    }

    #[test]
    fn test_reopening_same_kind_resets_form() {
        let mut modals = ModalController::new();
        modals.open(ModalKind::Donation);
        modals.donation_form().unwrap().select_preset(500);

        modals.open(ModalKind::Donation);
        assert_eq!(modals.donation_form().unwrap().amount(), "");
    }

    #[test]
    fn test_kind_names_and_titles() {
        assert_eq!(ModalKind::parse("donation"), Some(ModalKind::Donation));
        assert_eq!(ModalKind::parse("gallery"), None);
        assert_eq!(ModalKind::Quotation.as_str(), "quotation");
        assert_eq!(ModalKind::Quotation.title(), "Request a Quotation");
        assert_eq!(ModalKind::Donation.title(), "Support Our Ministry");
    }

    #[tokio::test]
    async fn test_submit_active_closes_on_success() {
        let store = InMemoryRecordStore::new();
        let mut modals = ModalController::new();
        modals.open(ModalKind::Donation);
        let form = modals.donation_form().unwrap();
        form.select_preset(1000);
        form.set_phone_number("254712345678");

        let result = modals.submit_active(&store).await.unwrap();
        assert!(result.is_ok());
        assert_eq!(modals.active(), None);
    }

    #[tokio::test]
    async fn test_submit_active_stays_open_on_failure() {
        let store = InMemoryRecordStore::failing();
        let mut modals = ModalController::new();
        modals.open(ModalKind::Donation);
        let form = modals.donation_form().unwrap();
        form.set_amount("300");
        form.set_phone_number("254712345678");

        let result = modals.submit_active(&store).await.unwrap();
        assert!(result.is_err());
        let form = modals.donation_form().unwrap();
        assert_eq!(form.phase(), FormPhase::Failed);
        assert_eq!(form.amount(), "300");
    }

    #[test]
    fn test_submit_with_nothing_open() {
        let store = InMemoryRecordStore::new();
        let mut modals = ModalController::new();
        assert!(tokio_test::block_on(modals.submit_active(&store)).is_none());
        assert_eq!(store.create_calls(), 0);
    }
}
