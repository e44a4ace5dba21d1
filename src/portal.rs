//! Portal form state and its transitions.
//!
//! `PortalState` is the whole form: the six read-only fields of the
//! data-source tab, the free-text input of the data-user tab, and the
//! submission ledger. Every user action is a `PortalAction`; `reduce`
//! is pure and returns the next state.

use serde::Serialize;

use crate::ledger::{
    SubmissionLedger, SubmissionOrigin, SubmissionRecord, SubmissionStatus,
};
use crate::pipeline::structuring::types::ParsedDocumentFields;

/// Read-only fields shown on the data-source tab. Empty until the first
/// successful upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFields {
    #[serde(rename = "eventID")]
    pub event_id: String,
    pub issuer: String,
    pub event_title: String,
    pub record_date: String,
    pub payment_date: String,
    pub data_hash: String,
}

impl From<ParsedDocumentFields> for DisplayFields {
    fn from(parsed: ParsedDocumentFields) -> Self {
        Self {
            event_id: parsed.event_id.into_value(),
            issuer: parsed.issuer.into_value(),
            event_title: parsed.event_title.into_value(),
            record_date: parsed.record_date.into_value(),
            payment_date: parsed.payment_date.into_value(),
            data_hash: parsed.data_hash,
        }
    }
}

#[derive(Debug, Clone)]
pub enum PortalAction {
    /// A document was decoded and parsed; replaces all six fields at once.
    DocumentParsed(ParsedDocumentFields),
    /// Data-source submit: append current fields as a record.
    SubmitDocument,
    /// Data-user input changed.
    EditApiSubmission(String),
    /// Data-user submit: append a sentinel record if the input is non-empty.
    SubmitApi,
    /// Replace the data-user input and submit it in one transition.
    SubmitApiText(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalState {
    pub fields: DisplayFields,
    pub api_submission: String,
    pub submitted_data: SubmissionLedger,
}

impl PortalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the state and return its successor.
    pub fn reduce(mut self, action: PortalAction) -> PortalState {
        match action {
            PortalAction::DocumentParsed(parsed) => {
                self.fields = DisplayFields::from(parsed);
            }
            PortalAction::SubmitDocument => {
                let record = document_record(&self.fields);
                self.submitted_data.append(record);
            }
            PortalAction::EditApiSubmission(text) => {
                self.api_submission = text;
            }
            PortalAction::SubmitApi => self.submit_api_input(),
            PortalAction::SubmitApiText(text) => {
                self.api_submission = text;
                self.submit_api_input();
            }
        }
        self
    }

    fn submit_api_input(&mut self) {
        if !self.api_submission.is_empty() {
            let text = std::mem::take(&mut self.api_submission);
            self.submitted_data.append(SubmissionRecord::from_api_text(text));
        }
    }
}

/// Snapshot the current fields as a data-source record. No check is made
/// that the fields are populated or were actually extracted.
fn document_record(fields: &DisplayFields) -> SubmissionRecord {
    SubmissionRecord {
        event_id: fields.event_id.clone(),
        issuer: fields.issuer.clone(),
        event_title: fields.event_title.clone(),
        record_date: fields.record_date.clone(),
        payment_date: fields.payment_date.clone(),
        data_hash: fields.data_hash.clone(),
        status: SubmissionStatus::PendingValidation,
        origin: SubmissionOrigin::DataSource,
    }
}
