//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(#[from] ConfigError),
}

/// Start the HTTP server based on configuration.
///
/// Blocks until a shutdown signal arrives and connections have drained.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.http.shutdown_timeout_seconds),
    );

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is told to shut down.
///
/// Binding to port 0 picks a free port; `Handle::listening` reports it.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
