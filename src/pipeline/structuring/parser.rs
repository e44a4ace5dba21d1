use std::sync::LazyLock;

use regex::Regex;

use super::fingerprint::data_hash;
use super::types::{CorporateActionField, FieldValue, ParsedDocumentFields};

static EVENT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Event ID: (\S+)").unwrap());
static ISSUER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Issuer: (.+)").unwrap());
static EVENT_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Event Title: (.+)").unwrap());
static RECORD_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Record Date: (\S+)").unwrap());
static PAYMENT_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Payment Date: (\S+)").unwrap());

fn pattern(field: CorporateActionField) -> &'static Regex {
    match field {
        CorporateActionField::EventId => &EVENT_ID,
        CorporateActionField::Issuer => &ISSUER,
        CorporateActionField::EventTitle => &EVENT_TITLE,
        CorporateActionField::RecordDate => &RECORD_DATE,
        CorporateActionField::PaymentDate => &PAYMENT_DATE,
    }
}

/// Capture one field from the document text. First occurrence wins.
pub fn extract_field(text: &str, field: CorporateActionField) -> FieldValue {
    pattern(field)
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|v| !v.is_empty())
        .map(|v| FieldValue::Extracted(v.to_string()))
        .unwrap_or_else(|| FieldValue::Defaulted(field.default_value().to_string()))
}

/// Parse all five fields plus the display hash from the full document text.
pub fn parse_document_fields(text: &str) -> ParsedDocumentFields {
    let parsed = ParsedDocumentFields {
        event_id: extract_field(text, CorporateActionField::EventId),
        issuer: extract_field(text, CorporateActionField::Issuer),
        event_title: extract_field(text, CorporateActionField::EventTitle),
        record_date: extract_field(text, CorporateActionField::RecordDate),
        payment_date: extract_field(text, CorporateActionField::PaymentDate),
        data_hash: data_hash(text),
    };

    let defaulted = parsed.defaulted_fields();
    if !defaulted.is_empty() {
        tracing::debug!(?defaulted, "Labels not found, placeholders substituted");
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTICE: &str = "Event ID: EVT-2031\n\
                          Issuer: Northwind Holdings plc\n\
                          Event Title: 2-for-1 Stock Split\n\
                          Record Date: 2025-06-30\n\
                          Payment Date: 2025-07-15\n";

    #[test]
    fn all_labels_present_are_extracted() {
        let parsed = parse_document_fields(NOTICE);
        assert_eq!(parsed.event_id, FieldValue::Extracted("EVT-2031".into()));
        assert_eq!(parsed.issuer, FieldValue::Extracted("Northwind Holdings plc".into()));
        assert_eq!(parsed.event_title, FieldValue::Extracted("2-for-1 Stock Split".into()));
        assert_eq!(parsed.record_date, FieldValue::Extracted("2025-06-30".into()));
        assert_eq!(parsed.payment_date, FieldValue::Extracted("2025-07-15".into()));
        assert!(parsed.defaulted_fields().is_empty());
    }

    #[test]
    fn missing_labels_fall_back_to_placeholders() {
        let parsed = parse_document_fields("Event ID: EVT-7\nRecord Date: 2026-01-02\n");
        assert_eq!(parsed.event_id, FieldValue::Extracted("EVT-7".into()));
        assert_eq!(parsed.record_date, FieldValue::Extracted("2026-01-02".into()));
        assert_eq!(parsed.issuer, FieldValue::Defaulted("Issuer Corp".into()));
        assert_eq!(parsed.event_title, FieldValue::Defaulted("Stock Split".into()));
        assert_eq!(parsed.payment_date, FieldValue::Defaulted("2025-03-15".into()));
        assert_eq!(
            parsed.defaulted_fields(),
            vec![
                CorporateActionField::Issuer,
                CorporateActionField::EventTitle,
                CorporateActionField::PaymentDate,
            ]
        );
    }

    #[test]
    fn empty_text_defaults_everything() {
        let parsed = parse_document_fields("");
        for field in CorporateActionField::ALL {
            assert_eq!(
                parsed.get(field),
                &FieldValue::Defaulted(field.default_value().into()),
                "{field:?}"
            );
        }
        assert_eq!(parsed.data_hash, "");
    }

    #[test]
    fn extracted_value_equal_to_placeholder_is_still_extracted() {
        let value = extract_field("Event ID: EVT12345 ", CorporateActionField::EventId);
        assert_eq!(value, FieldValue::Extracted("EVT12345".into()));
        assert!(!value.is_defaulted());
    }

    #[test]
    fn first_occurrence_wins() {
        let text = "Event ID: FIRST\nEvent ID: SECOND\n";
        assert_eq!(
            extract_field(text, CorporateActionField::EventId).into_value(),
            "FIRST"
        );
    }

    #[test]
    fn greedy_labels_run_to_end_of_line() {
        // Space-joined page text has no line breaks, so the capture runs on.
        let text = "Issuer: Acme Corp Record Date: 2025-05-01 ";
        assert_eq!(
            extract_field(text, CorporateActionField::Issuer).into_value(),
            "Acme Corp Record Date: 2025-05-01 "
        );
        assert_eq!(
            extract_field(text, CorporateActionField::RecordDate).into_value(),
            "2025-05-01"
        );
    }

    #[test]
    fn non_whitespace_capture_stops_at_space() {
        let text = "Payment Date: 15 March 2025";
        assert_eq!(
            extract_field(text, CorporateActionField::PaymentDate).into_value(),
            "15"
        );
    }

    #[test]
    fn label_without_value_defaults() {
        let text = "Event ID: \nIssuer:";
        assert!(extract_field(text, CorporateActionField::EventId).is_defaulted());
        assert!(extract_field(text, CorporateActionField::Issuer).is_defaulted());
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!(extract_field("event id: X1", CorporateActionField::EventId).is_defaulted());
    }

    #[test]
    fn hash_is_computed_from_full_text() {
        let parsed = parse_document_fields(NOTICE);
        assert_eq!(parsed.data_hash, data_hash(NOTICE));
        assert_eq!(parsed.data_hash.len(), 32);
    }
}
