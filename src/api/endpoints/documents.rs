//! Document upload endpoint.
//!
//! `POST /api/documents/upload`: body is the raw PDF. The whole body is
//! read into memory; no size limit is enforced on this route.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::core_state::UploadOutcome;

const PDF_MIME: &str = "application/pdf";

/// `POST /api/documents/upload`: parse a corporate action notice.
///
/// A body that fails to decode is not an error for the client: the
/// response carries `applied: false` and the unchanged fields.
pub async fn upload(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadOutcome>, ApiError> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let content_type = content_type
            .to_str()
            .map_err(|_| ApiError::BadRequest("Invalid Content-Type header".into()))?;
        if !accepts(content_type) {
            return Err(ApiError::BadRequest(format!(
                "Expected {PDF_MIME}, got {content_type}"
            )));
        }
    }

    tracing::info!(size = body.len(), "Document upload received");
    let outcome = ctx.core.ingest_document(body.to_vec()).await?;
    Ok(Json(outcome))
}

/// Accept the PDF type (with parameters) and generic binary uploads.
fn accepts(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == PDF_MIME || essence == "application/octet-stream"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_and_octet_stream() {
        assert!(accepts("application/pdf"));
        assert!(accepts("Application/PDF; name=notice.pdf"));
        assert!(accepts("application/octet-stream"));
    }

    #[test]
    fn rejects_other_types() {
        assert!(!accepts("application/json"));
        assert!(!accepts("text/plain"));
        assert!(!accepts(""));
    }
}
