// ABOUTME: Main library entry point for the notify relay
// ABOUTME: Provides the SSE fan-out registry, HTTP routes, and server assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Notify Relay
//!
//! A minimal server-push notification relay. Clients subscribe over a
//! long-lived Server-Sent Events stream and receive broadcast text messages
//! triggered by a separate publish call.
//!
//! ## Architecture
//!
//! - **SSE**: the subscriber registry, broadcaster, and stream route handlers
//! - **Routes**: health endpoint for monitoring infrastructure
//! - **Server**: router assembly, listener lifecycle, graceful shutdown
//! - **Config**: environment-only configuration management
//!
//! Delivery is best effort at send time: a channel whose send fails is
//! silently dropped from the registry, and the client must re-subscribe to
//! resume receiving notifications. There is no persistence, replay, or
//! ordering guarantee across concurrent publishes.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use notify_relay::config::environment::ServerConfig;
//! use notify_relay::server::NotificationServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     NotificationServer::new(config).run().await
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request tracing and CORS
pub mod middleware;

/// HTTP routes for monitoring endpoints
pub mod routes;

/// Server assembly and listener lifecycle
pub mod server;

/// Server-Sent Events (SSE) fan-out for real-time notifications
pub mod sse;
