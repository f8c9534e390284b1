// ABOUTME: Server assembly that wires the SSE manager, routes, and middleware into one router
// ABOUTME: Owns the listener lifecycle including bind and graceful shutdown
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::{
    config::environment::ServerConfig,
    middleware::{request_id_middleware, setup_cors},
    routes::HealthRoutes,
    sse::{SseManager, SseRoutes},
};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Notification relay server with explicitly injected shared state
///
/// The manager is constructed once here and handed to every route group, so
/// subscribe and publish handlers operate on the same registry without any
/// ambient global state.
pub struct NotificationServer {
    config: Arc<ServerConfig>,
    manager: Arc<SseManager>,
}

impl NotificationServer {
    /// Create a new server from loaded configuration
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let manager = Arc::new(SseManager::new(config.sse.channel_buffer));
        Self { config, manager }
    }

    /// Shared handle to the subscriber registry (for monitoring and tests)
    #[must_use]
    pub fn manager(&self) -> Arc<SseManager> {
        self.manager.clone()
    }

    /// Assemble the full router with all routes and middleware
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(SseRoutes::routes(self.manager.clone(), self.config.clone()))
            .merge(HealthRoutes::routes(self.manager.clone()))
            .layer(axum::middleware::from_fn(request_id_middleware))
            .layer(setup_cors(&self.config))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until ctrl-c
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured port or
    /// the listener fails while serving
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("HTTP server listening on http://{addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")?;

        info!("HTTP server shut down");
        Ok(())
    }
}

/// Resolves when the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
    }
}
