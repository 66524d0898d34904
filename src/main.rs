//! Strokesense HTTP server.
//!
//! Long-lived entry point: loads the scoring artifact once, then serves
//! `POST /predict` until shutdown. A failed artifact load keeps the server
//! running in a sticky model-unavailable state.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strokesense::server::{self, ServerState, ADDR_ENV, DEFAULT_ADDR};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let model_path = strokesense::resolve_model_path(None);
    tracing::info!("Starting strokesense, scoring artifact {:?}", model_path);

    // Load exactly once, before the socket accepts connections.
    let state = Arc::new(ServerState::load(&model_path));

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down");
}
