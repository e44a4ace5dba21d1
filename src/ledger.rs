//! Submission ledger: append-only, in-memory record of everything submitted
//! through either portal tab during this process lifetime.

use serde::{Deserialize, Serialize};

/// Sentinel used for identity fields of data-user submissions.
pub const API_SENTINEL: &str = "API";
/// Sentinel used for dates and hash of data-user submissions.
pub const NOT_APPLICABLE: &str = "N/A";

/// Validation status of a submission. Records never leave the initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[serde(rename = "Pending Validation")]
    PendingValidation,
}

/// Which portal role produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOrigin {
    /// Issuer or exchange uploading a notice.
    DataSource,
    /// Custodian or vendor pushing free text.
    DataUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    #[serde(rename = "eventID")]
    pub event_id: String,
    pub issuer: String,
    pub event_title: String,
    pub record_date: String,
    pub payment_date: String,
    pub data_hash: String,
    pub status: SubmissionStatus,
    pub origin: SubmissionOrigin,
}

impl SubmissionRecord {
    /// Record for the data-user path: sentinels everywhere except the title,
    /// which carries the submitted text.
    pub fn from_api_text(text: impl Into<String>) -> Self {
        Self {
            event_id: API_SENTINEL.into(),
            issuer: API_SENTINEL.into(),
            event_title: text.into(),
            record_date: NOT_APPLICABLE.into(),
            payment_date: NOT_APPLICABLE.into(),
            data_hash: NOT_APPLICABLE.into(),
            status: SubmissionStatus::PendingValidation,
            origin: SubmissionOrigin::DataUser,
        }
    }
}

/// Ordered sequence of submissions. Append is the only mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionLedger {
    records: Vec<SubmissionRecord>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: SubmissionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[SubmissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&SubmissionRecord> {
        self.records.last()
    }
}
