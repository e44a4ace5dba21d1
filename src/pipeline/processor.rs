//! Document processing orchestrator.
//!
//! Single entry point that drives the upload pipeline:
//! bytes → per-page text → document text → parsed fields.
//!
//! The PDF extractor is injected as a trait object so the pipeline can be
//! exercised with mock extractors.

use std::sync::Arc;

use serde::Serialize;

use crate::pipeline::extraction::types::{DocumentText, PdfExtractor};
use crate::pipeline::extraction::{ExtractionError, PdfTextExtractor};
use crate::pipeline::structuring::parser::parse_document_fields;
use crate::pipeline::structuring::types::{CorporateActionField, ParsedDocumentFields};

/// Errors that can occur during document processing.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Extraction worker failed: {0}")]
    Worker(String),
}

/// Summary of one processed upload.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
    pub page_count: usize,
    pub text_length: usize,
    pub defaulted: Vec<CorporateActionField>,
}

/// Full output of a successful run.
#[derive(Debug, Clone)]
pub struct ProcessingOutput {
    pub fields: ParsedDocumentFields,
    pub summary: ProcessingSummary,
}

pub struct DocumentProcessor {
    extractor: Box<dyn PdfExtractor + Send + Sync>,
}

impl DocumentProcessor {
    pub fn new(extractor: Box<dyn PdfExtractor + Send + Sync>) -> Self {
        Self { extractor }
    }

    /// Processor backed by the pdf-extract text layer reader.
    pub fn with_pdf_text() -> Self {
        Self::new(Box::new(PdfTextExtractor))
    }

    /// Run the pipeline synchronously on an in-memory document.
    pub fn process(&self, pdf_bytes: &[u8]) -> Result<ProcessingOutput, ProcessingError> {
        if pdf_bytes.is_empty() {
            return Err(ProcessingError::NoFileSelected);
        }

        let pages = self.extractor.extract_text(pdf_bytes)?;
        let document = DocumentText::from_pages(&pages);
        let fields = parse_document_fields(&document.full_text);

        let summary = ProcessingSummary {
            page_count: document.page_count,
            text_length: document.full_text.len(),
            defaulted: fields.defaulted_fields(),
        };

        tracing::info!(
            pages = summary.page_count,
            text_length = summary.text_length,
            defaulted = summary.defaulted.len(),
            "Document parsed"
        );

        Ok(ProcessingOutput { fields, summary })
    }

    /// Run the pipeline on the blocking pool. Decoding is CPU-bound and
    /// must not stall the async executor.
    pub async fn process_upload(
        self: Arc<Self>,
        pdf_bytes: Vec<u8>,
    ) -> Result<ProcessingOutput, ProcessingError> {
        tokio::task::spawn_blocking(move || self.process(&pdf_bytes))
            .await
            .map_err(|e| ProcessingError::Worker(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extraction::pdf::make_test_pdf;
    use crate::pipeline::extraction::types::PageExtraction;
    use crate::pipeline::structuring::types::FieldValue;

    struct MockExtractor {
        pages: Vec<String>,
    }

    impl PdfExtractor for MockExtractor {
        fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError> {
            Ok(self
                .pages
                .iter()
                .enumerate()
                .map(|(i, text)| PageExtraction {
                    page_number: i + 1,
                    text: text.clone(),
                })
                .collect())
        }
    }

    struct FailingExtractor;

    impl PdfExtractor for FailingExtractor {
        fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError> {
            Err(ExtractionError::PdfParsing("corrupt xref".into()))
        }
    }

    struct PanickingExtractor;

    impl PdfExtractor for PanickingExtractor {
        fn extract_text(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError> {
            panic!("decoder blew up");
        }
    }

    fn mock(pages: &[&str]) -> DocumentProcessor {
        DocumentProcessor::new(Box::new(MockExtractor {
            pages: pages.iter().map(|p| p.to_string()).collect(),
        }))
    }

    #[test]
    fn pages_are_concatenated_before_parsing() {
        let processor = mock(&["Event ID: EVT-88\nfiller", "Payment Date: 2025-09-01"]);
        let output = processor.process(b"%PDF-mock").unwrap();

        assert_eq!(output.fields.event_id, FieldValue::Extracted("EVT-88".into()));
        assert_eq!(
            output.fields.payment_date,
            FieldValue::Extracted("2025-09-01".into())
        );
        assert_eq!(output.summary.page_count, 2);
        assert_eq!(
            output.summary.text_length,
            "Event ID: EVT-88 filler Payment Date: 2025-09-01 ".len()
        );
    }

    #[test]
    fn summary_lists_defaulted_fields() {
        let processor = mock(&["Event ID: EVT-1 Record Date: 2025-01-01 Payment Date: 2025-02-01"]);
        let output = processor.process(b"%PDF-mock").unwrap();
        assert_eq!(
            output.summary.defaulted,
            vec![CorporateActionField::Issuer, CorporateActionField::EventTitle]
        );
    }

    #[test]
    fn empty_upload_is_rejected_before_extraction() {
        let processor = DocumentProcessor::new(Box::new(FailingExtractor));
        let result = processor.process(&[]);
        assert!(matches!(result, Err(ProcessingError::NoFileSelected)));
    }

    #[test]
    fn extractor_error_propagates() {
        let processor = DocumentProcessor::new(Box::new(FailingExtractor));
        let result = processor.process(b"%PDF-broken");
        assert!(matches!(result, Err(ProcessingError::Extraction(_))));
    }

    #[test]
    fn non_pdf_bytes_fail_with_real_extractor() {
        let processor = DocumentProcessor::with_pdf_text();
        let result = processor.process(b"PK\x03\x04 definitely a zip file");
        assert!(matches!(result, Err(ProcessingError::Extraction(_))));
    }

    #[test]
    fn real_pdf_round_trip_through_pipeline() {
        let pdf = make_test_pdf(&[
            &["Corporate Action Notice", "Event ID: EVT-4410"],
            &["Record Date: 2025-11-03", "Payment Date: 2025-11-20"],
        ]);
        let output = DocumentProcessor::with_pdf_text().process(&pdf).unwrap();

        assert_eq!(output.summary.page_count, 2);
        assert_eq!(output.fields.event_id, FieldValue::Extracted("EVT-4410".into()));
        assert_eq!(
            output.fields.record_date,
            FieldValue::Extracted("2025-11-03".into())
        );
        assert_eq!(
            output.fields.payment_date,
            FieldValue::Extracted("2025-11-20".into())
        );
        assert!(output.fields.issuer.is_defaulted());
        assert_eq!(output.fields.data_hash.len(), 32);
    }

    #[tokio::test]
    async fn process_upload_runs_on_blocking_pool() {
        let processor = Arc::new(mock(&["Issuer: Contoso"]));
        let output = processor.process_upload(b"%PDF".to_vec()).await.unwrap();
        assert_eq!(output.fields.issuer, FieldValue::Extracted("Contoso ".into()));
    }

    #[tokio::test]
    async fn panicking_extractor_surfaces_as_worker_error() {
        let processor = Arc::new(DocumentProcessor::new(Box::new(PanickingExtractor)));
        let result = processor.process_upload(b"%PDF".to_vec()).await;
        assert!(matches!(result, Err(ProcessingError::Worker(_))));
    }
}
