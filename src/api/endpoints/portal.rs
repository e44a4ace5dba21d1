//! Portal form endpoints.
//!
//! - `GET /`: the static form
//! - `GET /api/portal`: full state snapshot for redrawing the form

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::portal::PortalState;

const PORTAL_PAGE: &str = include_str!("../../../assets/portal.html");

/// `GET /`: serve the portal form.
pub async fn page() -> Html<&'static str> {
    Html(PORTAL_PAGE)
}

/// `GET /api/portal`: fields, data-user input, and ledger.
pub async fn snapshot(State(ctx): State<ApiContext>) -> Result<Json<PortalState>, ApiError> {
    Ok(Json(ctx.core.snapshot()?))
}
