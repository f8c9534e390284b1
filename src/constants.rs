// ABOUTME: Application constants organized by domain
// ABOUTME: Network defaults, environment helpers, and service identity values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Application constants grouped into logical domains rather than scattered
//! magic numbers at call sites.

use std::env;

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get HTTP server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(super::ports::DEFAULT_HTTP_PORT)
    }

    /// Get per-subscriber channel buffer from environment or default
    ///
    /// Zero is rejected along with unparseable values: the buffer bounds a
    /// live channel and must hold at least one message.
    #[must_use]
    pub fn sse_channel_buffer() -> usize {
        env::var("SSE_CHANNEL_BUFFER")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&buffer| buffer > 0)
            .unwrap_or(super::network_config::SSE_CHANNEL_BUFFER)
    }

    /// Get SSE idle timeout in seconds from environment or default (0 disables)
    #[must_use]
    pub fn sse_idle_timeout_secs() -> u64 {
        env::var("SSE_IDLE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(super::network_config::SSE_IDLE_TIMEOUT_SECS)
    }

    /// Get SSE keepalive interval in seconds from environment or default
    #[must_use]
    pub fn sse_keepalive_secs() -> u64 {
        env::var("SSE_KEEPALIVE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(super::network_config::SSE_KEEPALIVE_SECS)
    }

    /// Get allowed CORS origins from environment or wildcard default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".into())
    }
}

/// Default ports
pub mod ports {
    /// Default HTTP port for the relay server
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
}

/// Network configuration
pub mod network_config {
    /// Per-subscriber bounded channel capacity
    pub const SSE_CHANNEL_BUFFER: usize = 64;
    /// Idle timeout in seconds for open SSE streams (0 disables)
    pub const SSE_IDLE_TIMEOUT_SECS: u64 = 300;
    /// Keepalive comment interval in seconds
    pub const SSE_KEEPALIVE_SECS: u64 = 15;
}

/// HTTP route paths
pub mod routes {
    /// SSE subscription endpoint
    pub const NOTIFICATIONS: &str = "/notifications";
    /// Broadcast trigger endpoint
    pub const NOTIFY: &str = "/notify";
    /// Health check endpoint
    pub const HEALTH: &str = "/health";
}

/// Protocol-level strings
pub mod protocol {
    /// Event name for the initial connection handshake
    pub const EVENT_CONNECTION: &str = "connection";
    /// Event name for broadcast notifications
    pub const EVENT_NOTIFICATION: &str = "notification";
    /// Data payload of the initial connection event
    pub const CONNECTED_DATA: &str = "connected";
    /// Confirmation body returned by the notify endpoint
    pub const NOTIFY_CONFIRMATION: &str = "Notification sent";
}

/// Service names for structured logging
pub mod service_names {
    /// The relay server itself
    pub const NOTIFY_RELAY: &str = "notify-relay";
}
