//! HTTP server initialization and runtime setup.

use crate::application::services::CodecService;
use crate::config::Config;
use crate::domain::codec::DomainMappings;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Built-in domain shortcut tables
/// - Codec service for the configured scheme
/// - Axum HTTP server, stopped gracefully on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The codec fails its startup self-check
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let mappings = Arc::new(DomainMappings::builtin());
    let codec_service = CodecService::for_scheme(config.scheme, mappings);

    codec_service
        .self_check()
        .context("Codec self-check failed at startup")?;
    tracing::info!("Codec ready (scheme {})", codec_service.scheme());

    let state = AppState::new(Arc::new(codec_service));
    let app = app_router(state, &config.rate_limit());

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
