//! HTTP surface of the portal.
//!
//! Serves the static form at `/` and exposes the portal actions as JSON
//! endpoints under `/api/`. The router is composable: `portal_router()`
//! returns a `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::portal_router;
pub use server::{PortalServer, PortalSession};
pub use types::ApiContext;
