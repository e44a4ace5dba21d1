//! Submission endpoints, one per portal tab.
//!
//! - `POST /api/submissions/document`: data-source submit
//! - `PUT /api/submissions/api-input`: edit the data-user input
//! - `POST /api/submissions/api`: data-user submit
//! - `GET /api/submissions`: ledger in insertion order

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::ledger::SubmissionRecord;
use crate::portal::PortalAction;

#[derive(Serialize)]
pub struct SubmitResponse {
    /// Whether a record was appended.
    pub appended: bool,
    pub total: usize,
    pub record: Option<SubmissionRecord>,
}

#[derive(Deserialize)]
pub struct ApiInput {
    pub text: String,
}

#[derive(Serialize)]
pub struct ApiInputResponse {
    pub api_submission: String,
}

/// `POST /api/submissions/document`: append the current fields.
pub async fn submit_document(
    State(ctx): State<ApiContext>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let response = ctx.core.dispatch(PortalAction::SubmitDocument, |state, _| {
        SubmitResponse {
            appended: true,
            total: state.submitted_data.len(),
            record: state.submitted_data.last().cloned(),
        }
    })?;

    tracing::info!(total = response.total, "Data-source submission appended");
    Ok(Json(response))
}

/// `PUT /api/submissions/api-input`: replace the data-user input text.
pub async fn edit_api_input(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ApiInput>, JsonRejection>,
) -> Result<Json<ApiInputResponse>, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let api_submission = ctx
        .core
        .dispatch(PortalAction::EditApiSubmission(input.text), |state, _| {
            state.api_submission.clone()
        })?;
    Ok(Json(ApiInputResponse { api_submission }))
}

/// `POST /api/submissions/api`: submit the data-user input.
///
/// With an empty body the stored input is submitted. A `{"text": ...}` body
/// replaces the input and submits it in the same transition. An empty input
/// is a silent no-op.
pub async fn submit_api(
    State(ctx): State<ApiContext>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, ApiError> {
    let action = if body.is_empty() {
        PortalAction::SubmitApi
    } else {
        let Json(input) =
            Json::<ApiInput>::from_bytes(&body).map_err(|e| ApiError::BadRequest(e.body_text()))?;
        PortalAction::SubmitApiText(input.text)
    };

    let response = ctx.core.dispatch(action, |state, appended| SubmitResponse {
        appended: appended > 0,
        total: state.submitted_data.len(),
        record: state
            .submitted_data
            .last()
            .filter(|_| appended > 0)
            .cloned(),
    })?;

    if response.appended {
        tracing::info!(total = response.total, "Data-user submission appended");
    }

    Ok(Json(response))
}

/// `GET /api/submissions`: all records, oldest first.
pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<SubmissionRecord>>, ApiError> {
    Ok(Json(ctx.core.submissions()?))
}
