//! Portal API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! JSON routes are nested under `/api/`; the form page lives at `/`.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the portal router.
pub fn portal_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);
    build_router(ctx)
}

fn build_router(ctx: ApiContext) -> Router {
    // Uploads are read whole with no size cap.
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/portal", get(endpoints::portal::snapshot))
        .route(
            "/documents/upload",
            post(endpoints::documents::upload).layer(DefaultBodyLimit::disable()),
        )
        .route("/submissions", get(endpoints::submissions::list))
        .route(
            "/submissions/document",
            post(endpoints::submissions::submit_document),
        )
        .route(
            "/submissions/api-input",
            put(endpoints::submissions::edit_api_input),
        )
        .route("/submissions/api", post(endpoints::submissions::submit_api))
        .with_state(ctx)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(endpoints::portal::page))
        .nest("/api", api)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
}
