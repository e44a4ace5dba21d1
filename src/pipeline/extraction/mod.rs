pub mod types;
pub mod pdf;

pub use types::*;
pub use pdf::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),
}
