use std::panic::{catch_unwind, AssertUnwindSafe};

use super::types::{PageExtraction, PdfExtractor};
use super::ExtractionError;

/// PDF text extractor using the pdf-extract crate.
/// Handles digital PDFs with embedded text layers.
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Any panic raised inside the PDF library is reported as a parse error.
    fn pages(pdf_bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let result = catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        }));

        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(ExtractionError::PdfParsing(e.to_string())),
            Err(_) => Err(ExtractionError::PdfParsing(
                "panic during PDF decoding".into(),
            )),
        }
    }
}

impl PdfExtractor for PdfTextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<Vec<PageExtraction>, ExtractionError> {
        let pages = Self::pages(pdf_bytes)?
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageExtraction {
                page_number: i + 1,
                text,
            })
            .collect();

        Ok(pages)
    }
}

/// Build a PDF with one page per entry, each line drawn on its own row.
#[cfg(test)]
pub(crate) fn make_test_pdf(pages: &[&[&str]]) -> Vec<u8> {
    use lopdf::dictionary;
    use lopdf::{Document, Object, Stream};

    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut content = String::from("BT /F1 12 Tf 72 720 Td ");
        for line in lines.iter() {
            content.push_str(&format!("({line}) Tj 0 -16 Td "));
        }
        content.push_str("ET");

        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
