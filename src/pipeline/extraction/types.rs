use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// Text pulled from a single PDF page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageExtraction {
    pub page_number: usize,
    pub text: String,
}

impl PageExtraction {
    /// Text items of the page: non-empty, trimmed lines in reading order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.text.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Full extracted text of one uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentText {
    pub page_count: usize,
    pub full_text: String,
}

impl DocumentText {
    /// Join page items with single spaces, each page followed by one trailing space.
    pub fn from_pages(pages: &[PageExtraction]) -> Self {
        let mut full_text = String::new();
        for page in pages {
            full_text.push_str(&page.items().collect::<Vec<_>>().join(" "));
            full_text.push(' ');
        }
        Self {
            page_count: pages.len(),
            full_text,
        }
    }
}

/// PDF text extraction abstraction
pub trait PdfExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError>;
}
