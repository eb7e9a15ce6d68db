use std::future::Future;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{app, config::ServeConfig, AppState};

pub async fn bind(config: &ServeConfig) -> anyhow::Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("couldn't bind {}:{}", config.host, config.port))
}

/// Serves until `shutdown` resolves. In-flight requests are allowed to finish.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server stopped unexpectedly")
}

pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "couldn't listen for ctrl-c, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
