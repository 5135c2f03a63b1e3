//! Serve command: run the HTTP API.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Args;
use paragon_common::ServerConfig;
use tracing::{info, warn};

use super::build_orchestrator;
use crate::api::{self, AppState};
use crate::application::services::TemplateRegistry;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides PARAGON_LISTEN_ADDR)
    #[arg(long)]
    pub listen_addr: Option<SocketAddr>,
}

/// Build the router state from configuration.
#[must_use]
pub fn app_state(config: &ServerConfig) -> AppState {
    let orchestrator = config.deploy_enabled.then(|| build_orchestrator(config));
    AppState::new(orchestrator, TemplateRegistry::default())
}

/// Serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run(args: &ServeArgs, mut config: ServerConfig) -> Result<()> {
    if let Some(addr) = args.listen_addr {
        config.listen_addr = addr;
    }

    info!(
        listen_addr = %config.listen_addr,
        namespace = %config.namespace,
        kubectl = %config.kubectl,
        manifest_dir = %config.manifest_dir.display(),
        deploy_enabled = config.deploy_enabled,
        "configuration loaded",
    );

    let router = api::router(app_state(&config));
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .context("failed to bind TCP listener")?;

    info!("paragon ready on http://{}", config.listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("paragon shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal");
}
