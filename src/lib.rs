pub mod api;
pub mod config;
pub mod core_state; // Transport-agnostic state
pub mod ledger;
pub mod pipeline;
pub mod portal;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::api::server::start_portal_server;
use crate::config::PortalConfig;
use crate::core_state::CoreState;

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(e) = launch() {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn launch() -> Result<(), String> {
    let config = PortalConfig::from_env()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to build tokio runtime: {e}"))?;

    runtime.block_on(serve(config))
}

async fn serve(config: PortalConfig) -> Result<(), String> {
    let core = Arc::new(CoreState::new());
    let mut server = start_portal_server(core, config.bind_addr).await?;

    tracing::info!(
        session_id = %server.session.session_id,
        url = %format!("http://{}/", server.session.server_addr),
        "Portal ready"
    );

    let signal = tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"));

    server.stop().await;
    signal
}
