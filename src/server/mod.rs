pub mod cors;
pub mod routes;

pub use routes::{build_router, EnhanceRequest, EnhanceResponse, ErrorResponse};

use anyhow::{Context, Result};
use log::info;

use crate::booster::PromptBooster;
use crate::config::ServerConfig;

/// Binds `host:port` and serves until Ctrl-C.
pub async fn serve(booster: PromptBooster, config: &ServerConfig) -> Result<()> {
    let app = build_router(booster, config)?;

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        "Listening on http://{} (allowed origin: {})",
        listener.local_addr()?,
        config.allowed_origin
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated with an error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
