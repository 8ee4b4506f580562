//! HTTP server wiring

use std::future::Future;

use axum::Router;
use themegate_config::AppConfig;
use tokio::net::TcpListener;

use crate::{routes::all_routes, state::AppState};

/// Theme switch API server
#[derive(Debug, Clone)]
pub struct ApiServer {
    config: AppConfig,
    state: AppState,
}

impl ApiServer {
    /// Create a server for a validated configuration
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::new(&config);
        Self { config, state }
    }

    /// Shared application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Router with all routes and middleware
    pub fn router(&self) -> Router {
        all_routes(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.config.server.bind_address()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            %addr,
            themes = ?self.state.switcher.themes().names(),
            "Themegate API listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Themegate API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
