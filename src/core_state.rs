//! Transport-agnostic application state.
//!
//! `CoreState` owns the single `PortalState` of this process and the
//! document processor. Handlers never mutate the portal directly: every
//! change goes through `dispatch`, which applies one reducer transition
//! under the write lock, so updates are serialized.

use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::ledger::SubmissionRecord;
use crate::pipeline::processor::{DocumentProcessor, ProcessingError, ProcessingSummary};
use crate::portal::{DisplayFields, PortalAction, PortalState};

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    portal: RwLock<PortalState>,
    processor: Arc<DocumentProcessor>,
}

/// Result of one upload, as reported to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct UploadOutcome {
    /// Whether the parsed fields replaced the previous ones.
    pub applied: bool,
    pub fields: DisplayFields,
    pub summary: Option<ProcessingSummary>,
}

impl CoreState {
    /// Create a CoreState reading documents through pdf-extract.
    pub fn new() -> Self {
        Self::with_processor(DocumentProcessor::with_pdf_text())
    }

    pub fn with_processor(processor: DocumentProcessor) -> Self {
        Self {
            portal: RwLock::new(PortalState::new()),
            processor: Arc::new(processor),
        }
    }

    /// Owned copy of the current portal state.
    pub fn snapshot(&self) -> Result<PortalState, CoreError> {
        let guard = self.portal.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(guard.clone())
    }

    /// Number of records in the ledger.
    pub fn submission_count(&self) -> Result<usize, CoreError> {
        let guard = self.portal.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(guard.submitted_data.len())
    }

    /// Ledger records, oldest first.
    pub fn submissions(&self) -> Result<Vec<SubmissionRecord>, CoreError> {
        let guard = self.portal.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(guard.submitted_data.records().to_vec())
    }

    /// Apply one transition, then read the result through `view` while the
    /// write lock is still held. `view` also receives how many records the
    /// transition appended.
    pub fn dispatch<R>(
        &self,
        action: PortalAction,
        view: impl FnOnce(&PortalState, usize) -> R,
    ) -> Result<R, CoreError> {
        let mut guard = self.portal.write().map_err(|_| CoreError::LockPoisoned)?;
        let before = guard.submitted_data.len();
        *guard = std::mem::take(&mut *guard).reduce(action);
        let appended = guard.submitted_data.len() - before;
        Ok(view(&guard, appended))
    }

    /// Decode and parse an uploaded document, then publish the fields.
    ///
    /// Parse failures are logged and swallowed: the fields keep their
    /// previous values and the outcome reports `applied: false`.
    pub async fn ingest_document(&self, pdf_bytes: Vec<u8>) -> Result<UploadOutcome, CoreError> {
        let size = pdf_bytes.len();
        match self.processor.clone().process_upload(pdf_bytes).await {
            Ok(output) => {
                let action = PortalAction::DocumentParsed(output.fields);
                let fields = self.dispatch(action, |state, _| state.fields.clone())?;
                Ok(UploadOutcome {
                    applied: true,
                    fields,
                    summary: Some(output.summary),
                })
            }
            Err(ProcessingError::NoFileSelected) => {
                tracing::error!("No file selected.");
                self.unchanged()
            }
            Err(e) => {
                tracing::error!(error = %e, size, "Error parsing PDF");
                self.unchanged()
            }
        }
    }

    fn read_fields(&self) -> Result<DisplayFields, CoreError> {
        let guard = self.portal.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(guard.fields.clone())
    }

    fn unchanged(&self) -> Result<UploadOutcome, CoreError> {
        Ok(UploadOutcome {
            applied: false,
            fields: self.read_fields()?,
            summary: None,
        })
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
