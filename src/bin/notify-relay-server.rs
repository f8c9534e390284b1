// ABOUTME: Server binary that loads configuration, initializes logging, and runs the relay
// ABOUTME: Production entry point for the SSE notification relay
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Notify Relay Server Binary
//!
//! Starts the SSE notification relay with environment-driven configuration.

use anyhow::Result;
use clap::Parser;
use notify_relay::{config::environment::ServerConfig, logging, server::NotificationServer};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "notify-relay-server")]
#[command(about = "Notify Relay - server-push notification relay over SSE")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging at the configured level
    logging::init_from_env(&config.log_level)?;

    info!("Starting Notify Relay");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    let server = NotificationServer::new(Arc::new(config));
    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints with their ports
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Real-time Notifications:");
    info!("   SSE Stream:  GET http://{host}:{port}/notifications");
    info!("   Broadcast:   GET http://{host}:{port}/notify?message={{text}}");
    info!("Monitoring:");
    info!("   Health Check: GET http://{host}:{port}/health");
    info!("=== End of Endpoint List ===");
}
