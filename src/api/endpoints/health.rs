//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub submissions: usize,
    pub version: &'static str,
}

/// `GET /api/health`: liveness check.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let submissions = ctx.core.submission_count()?;

    Ok(Json(HealthResponse {
        status: "ok",
        submissions,
        version: crate::config::APP_VERSION,
    }))
}
