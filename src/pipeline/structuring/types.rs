use serde::{Deserialize, Serialize};

/// The five labeled fields read from a corporate action notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorporateActionField {
    EventId,
    Issuer,
    EventTitle,
    RecordDate,
    PaymentDate,
}

impl CorporateActionField {
    pub const ALL: [CorporateActionField; 5] = [
        CorporateActionField::EventId,
        CorporateActionField::Issuer,
        CorporateActionField::EventTitle,
        CorporateActionField::RecordDate,
        CorporateActionField::PaymentDate,
    ];

    /// Placeholder installed when the label is not found.
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::EventId => "EVT12345",
            Self::Issuer => "Issuer Corp",
            Self::EventTitle => "Stock Split",
            Self::RecordDate => "2025-03-01",
            Self::PaymentDate => "2025-03-15",
        }
    }
}

/// A field value, tagged with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Captured from the document text.
    Extracted(String),
    /// Label absent; static placeholder substituted.
    Defaulted(String),
}

impl FieldValue {
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }

    pub fn into_value(self) -> String {
        match self {
            Self::Extracted(v) | Self::Defaulted(v) => v,
        }
    }
}

/// Fields parsed from one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocumentFields {
    pub event_id: FieldValue,
    pub issuer: FieldValue,
    pub event_title: FieldValue,
    pub record_date: FieldValue,
    pub payment_date: FieldValue,
    /// Truncated text encoding of the full document text. Display only.
    pub data_hash: String,
}

impl ParsedDocumentFields {
    pub fn get(&self, field: CorporateActionField) -> &FieldValue {
        match field {
            CorporateActionField::EventId => &self.event_id,
            CorporateActionField::Issuer => &self.issuer,
            CorporateActionField::EventTitle => &self.event_title,
            CorporateActionField::RecordDate => &self.record_date,
            CorporateActionField::PaymentDate => &self.payment_date,
        }
    }

    /// Fields that fell back to their placeholder.
    pub fn defaulted_fields(&self) -> Vec<CorporateActionField> {
        CorporateActionField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_defaulted())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_serializes_with_source_tag() {
        let json = serde_json::to_value(FieldValue::Extracted("EVT-9".into())).unwrap();
        assert_eq!(json["source"], "extracted");
        assert_eq!(json["value"], "EVT-9");

        let json = serde_json::to_value(FieldValue::Defaulted("EVT12345".into())).unwrap();
        assert_eq!(json["source"], "defaulted");
    }

    #[test]
    fn into_value_unwraps_both_variants() {
        assert_eq!(FieldValue::Extracted("a".into()).into_value(), "a");
        assert_eq!(FieldValue::Defaulted("b".into()).into_value(), "b");
    }
}
